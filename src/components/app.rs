use super::{
    home_view::HomeView, intro_overlay::IntroOverlay, settings_modal::SettingsModal,
    summary_view::SummaryView,
};
use crate::model::{HomeAction, HomeState};
use crate::state::settings::{self, Settings};
use crate::util::{clog, cwarn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Home,
    Summary,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);
    let home_state = use_reducer(HomeState::default);
    let settings_state = use_state(Settings::default);
    let settings_loaded = use_state(|| false);
    let show_settings = use_state(|| false);
    let last_level = use_mut_ref(|| (1u32, 0i64));

    // Load persisted settings
    {
        let settings_state = settings_state.clone();
        let settings_loaded = settings_loaded.clone();
        use_effect_with((), move |_| {
            match settings::load() {
                Ok(Some(s)) => settings_state.set(s),
                Ok(None) => clog("no saved settings, using defaults"),
                Err(e) => cwarn(&format!("could not load settings: {e}")),
            }
            settings_loaded.set(true);
            || ()
        });
    }
    // Persist settings changes once the initial load has happened
    {
        let deps = ((*settings_state).clone(), *settings_loaded);
        use_effect_with(deps, move |(s, loaded)| {
            if *loaded {
                if let Err(e) = settings::save(s) {
                    cwarn(&format!("could not save settings: {e}"));
                }
            }
            || ()
        });
    }

    // Log level and score changes
    {
        let last_level = last_level.clone();
        use_effect_with((home_state.level.level, home_state.total_score()), move |deps| {
            let (level, score) = *deps;
            let mut prev = last_level.borrow_mut();
            if prev.0 != level {
                clog(&format!("level: {} -> {}", prev.0, level));
            }
            if prev.1 != score {
                clog(&format!("score: {} -> {}", prev.1, score));
            }
            *prev = (level, score);
            || ()
        });
    }

    // Hotkeys
    {
        let view = view.clone();
        let show_settings = show_settings.clone();
        let settings_state = settings_state.clone();
        use_effect_with(
            (*view, *show_settings, settings_state.intro_seen),
            move |_| {
                let window = web_sys::window();
                let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| match e.key().as_str() {
                    "Escape" => {
                        if *show_settings {
                            show_settings.set(false);
                        } else if !settings_state.intro_seen {
                            settings_state.set(Settings { intro_seen: true, ..(*settings_state).clone() });
                        }
                    }
                    "s" | "S" => {
                        if !*show_settings {
                            view.set(if *view == View::Home { View::Summary } else { View::Home });
                        }
                    }
                    _ => {}
                }) as Box<dyn FnMut(_)>);
                if let Some(win) = &window {
                    if let Err(e) = win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref()) {
                        cwarn(&format!("could not attach keydown listener: {e:?}"));
                    }
                }
                move || {
                    if let Some(win) = &window {
                        let _ = win.remove_event_listener_with_callback(
                            "keydown",
                            key_cb.as_ref().unchecked_ref(),
                        );
                    }
                    drop(key_cb);
                }
            },
        );
    }

    let to_home = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Home))
    };
    let to_summary = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Summary))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let update_settings = |f: fn(&mut Settings)| {
        let settings_state = settings_state.clone();
        Callback::from(move |_| {
            let mut s = (*settings_state).clone();
            f(&mut s);
            settings_state.set(s);
        })
    };
    let show_help = update_settings(|s| s.intro_seen = false);
    let hide_intro = update_settings(|s| s.intro_seen = true);
    let toggle_history = update_settings(|s| s.show_history = !s.show_history);
    let toggle_achievements = update_settings(|s| s.show_achievements = !s.show_achievements);
    let hard_reset = {
        let home_state = home_state.clone();
        let settings_state = settings_state.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |_| {
            if let Err(e) = settings::clear() {
                cwarn(&format!("could not clear settings: {e}"));
            }
            home_state.dispatch(HomeAction::ResetSession);
            settings_state.set(Settings::default());
            show_settings.set(false);
        })
    };

    let content = match *view {
        View::Home => html! { <HomeView
            home_state={home_state.clone()}
            settings={(*settings_state).clone()}
            to_summary={to_summary}
            on_show_help={show_help}
            on_open_settings={open_settings}
        /> },
        View::Summary => html! { <SummaryView home_state={home_state.clone()} to_home={to_home} /> },
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div id="top-bar" style="padding:10px 16px; border-bottom:1px solid #30363d; font-weight:600;">{"Mosque Youth Deed Tracker"}</div>
            { content }
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                show_history={settings_state.show_history}
                on_toggle_history={toggle_history}
                show_achievements={settings_state.show_achievements}
                on_toggle_achievements={toggle_achievements}
                on_hard_reset={hard_reset}
            />
            <IntroOverlay show={*settings_loaded && !settings_state.intro_seen} {hide_intro} />
        </div>
    }
}
