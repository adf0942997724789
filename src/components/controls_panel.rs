use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub to_summary: Callback<()>,
    pub on_reset_session: Callback<()>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let summary_cb = {
        let cb = props.to_summary.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset_session.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let help_cb = {
        let cb = props.on_show_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={summary_cb}>{"Session Summary"}</button>
        <button onclick={settings_cb}>{"Settings"}</button>
        <button onclick={reset_cb}>{"Reset Session"}</button>
        <button onclick={help_cb}>{"Help"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Hotkey: 'S' summary, Esc closes dialogs"}</div>
    </div>}
}
