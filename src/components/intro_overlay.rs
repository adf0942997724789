use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_btn = {
        let cb = props.hide_intro.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:40;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#2ea043; text-align:center;">{"Deed Tracker"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Record your deeds, earn points, and level up."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Click a good deed to add its points to your score."}</li>
                <li>{"Each deed has a cap per cycle; one click past the cap starts the cycle again from zero."}</li>
                <li>{"Bad deeds lower your total score but never your level."}</li>
                <li>{"Reach 100 points to level up."}</li>
                <li>{"Medals show how close each category is to its maximum."}</li>
                <li>{"Nothing is saved: closing the page ends the session."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start"}</button>
            </div>
        </div>
    }
}
