use crate::model::HistoryEntry;
use crate::state::ClickOutcome;
use crate::util::format_clock;
use std::collections::VecDeque;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPanelProps {
    pub entries: VecDeque<HistoryEntry>,
    #[prop_or(10)]
    pub max_rows: usize,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    if props.entries.is_empty() {
        return html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:12px; opacity:0.7;">{"No activity yet."}</div>};
    }
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:4px; font-size:12px;">
        <div style="font-weight:600; font-size:14px; margin-bottom:4px;">{"Recent Activity"}</div>
        { for props.entries.iter().rev().take(props.max_rows).map(|e| {
            let detail = match e.outcome {
                ClickOutcome::Counted { count, points } => format!("#{} · {} pts", count, points),
                ClickOutcome::Rollover => "cycle complete, reset".to_string(),
            };
            html!{ <div style="display:flex; gap:8px;">
                <span style="opacity:0.6; font-variant-numeric:tabular-nums;">{ format_clock(e.at_ms) }</span>
                <span style={format!("flex:1; color:{};", e.category.color())}>{ e.label }</span>
                <span style="opacity:0.8;">{ detail }</span>
            </div> }
        }) }
    </div>}
}
