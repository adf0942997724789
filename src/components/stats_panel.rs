use crate::state::level::bar_percent;
use crate::util::{format_percent, format_signed};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub level: u32,
    pub total_score: i64,
    pub progress: f64,
    pub streak: u32,
    pub best_streak: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let bar = bar_percent(props.progress);
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"⭐"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Level"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.level }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"∑"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Total Score"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format_signed(props.total_score) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", icon_style)}>{"🔥"}</span>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Streak"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ format!("{} (best {})", props.streak, props.best_streak) }</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:4px;">
                <div style="display:flex; justify-content:space-between; font-size:12px; opacity:0.8;">
                    <span>{ format!("Progress to level {}", props.level + 1) }</span>
                    <span>{ format_percent(bar) }</span>
                </div>
                <div style="height:8px; background:#0e1116; border:1px solid #30363d; border-radius:4px; overflow:hidden;">
                    <div style={format!("height:100%; width:{:.1}%; background:#2ea043;", bar)}></div>
                </div>
            </div>
        </div>
    }
}
