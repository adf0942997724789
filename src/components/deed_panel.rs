use crate::catalog::Category;
use crate::state::CounterStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DeedPanelProps {
    pub category: Category,
    pub store: CounterStore,
    /// Emits the index of the clicked deed within the category.
    pub on_perform: Callback<usize>,
}

#[function_component]
pub fn DeedPanel(props: &DeedPanelProps) -> Html {
    let color = props.category.color();
    let totals = props.store.totals();
    let sign = if props.category.is_good() { "+" } else { "-" };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; min-width:260px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span style={format!("font-weight:600; color:{};", color)}>{ props.category.title() }</span>
            <span style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("{} acts · {} pts", totals.activity, totals.score) }</span>
        </div>
        { for props.category.deeds().iter().enumerate().map(|(i, deed)| {
            let counter = props.store.get(deed.label);
            let cb = props.on_perform.clone();
            let onclick = Callback::from(move |_| cb.emit(i));
            let full = counter.count == deed.max_frequency;
            html!{ <button {onclick} title={ if full { "Next click starts a new cycle" } else { "" } }
                style={format!("display:flex; align-items:center; gap:8px; padding:6px 8px; border-left:3px solid {};", color)}>
                <span style="flex:1; text-align:left;">{ deed.label }</span>
                <span style={format!("color:{}; font-size:12px;", color)}>{ format!("{}{}", sign, deed.points) }</span>
                <span style="min-width:44px; text-align:right; font-size:12px; font-variant-numeric:tabular-nums;">{ format!("{}/{}", counter.count, deed.max_frequency) }</span>
            </button> }
        }) }
    </div>}
}
