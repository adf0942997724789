use crate::catalog::{max_possible_score, Category};
use crate::model::HomeState;
use crate::state::achievement::{percentage, select};
use crate::util::{format_percent, format_signed};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryViewProps {
    pub home_state: UseReducerHandle<HomeState>,
    pub to_home: Callback<()>,
}

#[function_component(SummaryView)]
pub fn summary_view(props: &SummaryViewProps) -> Html {
    let state = &*props.home_state;
    let back_cb = {
        let cb = props.to_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cell = "padding:4px 8px; border-bottom:1px solid #30363d;";
    let num = "padding:4px 8px; border-bottom:1px solid #30363d; text-align:right; font-variant-numeric:tabular-nums;";

    let category_rows = Category::ALL.iter().map(|&category| {
        let totals = state.store(category).totals();
        let max = max_possible_score(category.deeds());
        let pct = percentage(totals.score, max);
        // Medals only rank good categories.
        let medal = if category.is_good() {
            select(pct).map(|a| format!("{} {}", a.medal.name(), a.medal.icon().repeat(a.icons as usize)))
        } else {
            None
        };
        html! {<tr>
            <td style={format!("{} color:{};", cell, category.color())}>{ category.title() }</td>
            <td style={num}>{ totals.activity }</td>
            <td style={num}>{ totals.score }</td>
            <td style={num}>{ max }</td>
            <td style={num}>{ format_percent(pct) }</td>
            <td style={cell}>{ medal.unwrap_or_else(|| "-".to_string()) }</td>
        </tr>}
    });

    let deed_tables = Category::ALL.iter().map(|&category| {
        let store = state.store(category);
        html! {<div style="display:flex; flex-direction:column; gap:4px; min-width:260px;">
            <div style={format!("font-weight:600; color:{};", category.color())}>{ category.title() }</div>
            <table style="border-collapse:collapse; font-size:12px;">
                <tr><th style={cell}>{"Deed"}</th><th style={num}>{"Count"}</th><th style={num}>{"Points"}</th></tr>
                { for category.deeds().iter().map(|d| {
                    let c = store.get(d.label);
                    html!{<tr>
                        <td style={cell}>{ d.label }</td>
                        <td style={num}>{ format!("{}/{}", c.count, d.max_frequency) }</td>
                        <td style={num}>{ c.total_points }</td>
                    </tr>}
                }) }
            </table>
        </div>}
    });

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Session Summary"}</h2>
                <button onclick={back_cb}>{"Back to Deeds"}</button>
            </div>
            <div style="display:flex; gap:24px; font-size:14px;">
                <span>{ format!("Level {}", state.level.level) }</span>
                <span>{ format!("Total score {}", format_signed(state.total_score())) }</span>
                <span>{ format!("Best streak {}", state.streak.best) }</span>
                <span>{ format!("Actions logged {}", state.history.len()) }</span>
            </div>
            <table style="border-collapse:collapse; font-size:13px; max-width:760px;">
                <tr>
                    <th style={cell}>{"Category"}</th>
                    <th style={num}>{"Activity"}</th>
                    <th style={num}>{"Score"}</th>
                    <th style={num}>{"Max"}</th>
                    <th style={num}>{"%"}</th>
                    <th style={cell}>{"Medal"}</th>
                </tr>
                { for category_rows }
            </table>
            <div style="display:flex; gap:24px; flex-wrap:wrap;">{ for deed_tables }</div>
        </div>
    }
}
