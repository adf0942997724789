use crate::catalog::{max_possible_score, Category};
use crate::state::achievement::{percentage, select};
use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AchievementPanelProps {
    /// (category, current score) for each good category.
    pub scores: Vec<(Category, u32)>,
}

#[function_component]
pub fn AchievementPanel(props: &AchievementPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px;">
        <div style="font-weight:600;">{"Achievements"}</div>
        { for props.scores.iter().map(|(category, score)| {
            let pct = percentage(*score, max_possible_score(category.deeds()));
            let medal = match select(pct) {
                Some(a) => html!{ <span title={a.medal.name()}>{ a.medal.icon().repeat(a.icons as usize) }</span> },
                None => html!{ <span style="opacity:0.5; font-size:12px;">{"No medal yet"}</span> },
            };
            html!{ <div style="display:flex; align-items:center; gap:8px;">
                <span style={format!("flex:1; color:{};", category.color())}>{ category.title() }</span>
                <span style="font-size:12px; opacity:0.8; min-width:40px; text-align:right;">{ format_percent(pct) }</span>
                { medal }
            </div> }
        }) }
    </div>}
}
