use super::{
    achievement_panel::AchievementPanel, controls_panel::ControlsPanel, deed_panel::DeedPanel,
    history_panel::HistoryPanel, stats_panel::StatsPanel,
};
use crate::catalog::Category;
use crate::model::{HomeAction, HomeState};
use crate::state::Settings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub home_state: UseReducerHandle<HomeState>,
    pub settings: Settings,
    pub to_summary: Callback<()>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let state = &*props.home_state;

    let perform = |category: Category| {
        let home_state = props.home_state.clone();
        Callback::from(move |index: usize| {
            home_state.dispatch(HomeAction::Perform { category, index, at_ms: js_sys::Date::now() });
        })
    };
    let reset_session = {
        let home_state = props.home_state.clone();
        Callback::from(move |_| home_state.dispatch(HomeAction::ResetSession))
    };

    let achievements = if props.settings.show_achievements {
        let scores = vec![
            (Category::MainGood, state.main_good.totals().score),
            (Category::AdditionalGood, state.additional_good.totals().score),
        ];
        html! { <AchievementPanel {scores} /> }
    } else {
        html! {}
    };
    let history = if props.settings.show_history {
        html! { <HistoryPanel entries={state.history.clone()} /> }
    } else {
        html! {}
    };

    html! {
        <div style="padding:16px; display:flex; gap:16px; flex-wrap:wrap; align-items:flex-start;">
            <div style="display:flex; flex-direction:column; gap:12px;">
                <StatsPanel
                    level={state.level.level}
                    total_score={state.total_score()}
                    progress={state.progress_percent()}
                    streak={state.streak.current}
                    best_streak={state.streak.best}
                />
                { achievements }
                <ControlsPanel
                    to_summary={props.to_summary.clone()}
                    on_reset_session={reset_session}
                    on_show_help={props.on_show_help.clone()}
                    on_open_settings={props.on_open_settings.clone()}
                />
            </div>
            <div style="display:flex; flex-direction:column; gap:12px;">
                <DeedPanel category={Category::MainGood} store={state.main_good.clone()} on_perform={perform(Category::MainGood)} />
                <DeedPanel category={Category::AdditionalGood} store={state.additional_good.clone()} on_perform={perform(Category::AdditionalGood)} />
            </div>
            <div style="display:flex; flex-direction:column; gap:12px;">
                <DeedPanel category={Category::Bad} store={state.bad.clone()} on_perform={perform(Category::Bad)} />
                { history }
            </div>
        </div>
    }
}
