//! Core session model for the deed tracker home page.
//! One `HomeState` value holds the three category stores, the level and the
//! session extras (streak, history). `HomeAction`s drive it through
//! `yew::Reducible`.

use crate::catalog::{Category, Deed};
use crate::state::counters::{reduce_category, ClickOutcome, CounterStore};
use crate::state::level::{total_score, LevelState};
use serde::Serialize;
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// Total score at which a good deed levels up. Flat, never raised.
    pub next_level_score: i64,
    /// Score width of one level for the progress bar.
    pub level_step: i64,
    /// Entries kept in the activity history.
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            next_level_score: 100,
            level_step: 100,
            history_limit: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub category: Category,
    pub label: &'static str,
    pub outcome: ClickOutcome,
    /// Milliseconds since the epoch, as supplied by the caller.
    pub at_ms: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

impl Streak {
    fn record(self, good: bool) -> Self {
        if good {
            let current = self.current.saturating_add(1);
            Self { current, best: self.best.max(current) }
        } else {
            Self { current: 0, ..self }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeState {
    pub config: GameConfig,
    pub main_good: CounterStore,
    pub additional_good: CounterStore,
    pub bad: CounterStore,
    pub level: LevelState,
    pub streak: Streak,
    pub history: VecDeque<HistoryEntry>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl HomeState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            main_good: CounterStore::default(),
            additional_good: CounterStore::default(),
            bad: CounterStore::default(),
            level: LevelState::default(),
            streak: Streak::default(),
            history: VecDeque::new(),
        }
    }

    pub fn store(&self, category: Category) -> &CounterStore {
        match category {
            Category::MainGood => &self.main_good,
            Category::AdditionalGood => &self.additional_good,
            Category::Bad => &self.bad,
        }
    }

    fn store_mut(&mut self, category: Category) -> &mut CounterStore {
        match category {
            Category::MainGood => &mut self.main_good,
            Category::AdditionalGood => &mut self.additional_good,
            Category::Bad => &mut self.bad,
        }
    }

    pub fn total_score(&self) -> i64 {
        total_score(
            self.main_good.totals().score,
            self.additional_good.totals().score,
            self.bad.totals().score,
        )
    }

    pub fn progress_percent(&self) -> f64 {
        self.level.progress_percent(self.config.level_step)
    }

    /// Runs one click through its category reducer, then the level check.
    fn handle(&mut self, category: Category, deed: &'static Deed, at_ms: f64) {
        let (next, outcome) = reduce_category(self.store(category), deed);
        *self.store_mut(category) = next;

        let total = self.total_score();
        self.level = if category.is_good() {
            self.level.check_level_up(total, self.config.next_level_score)
        } else {
            self.level.with_score(total)
        };
        self.streak = self.streak.record(category.is_good());

        self.history.push_back(HistoryEntry { category, label: deed.label, outcome, at_ms });
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }
}

#[derive(Clone, Debug)]
pub enum HomeAction {
    /// A click on `category.deeds()[index]`. Unknown indices are ignored.
    Perform { category: Category, index: usize, at_ms: f64 },
    ResetSession,
}

impl Reducible for HomeState {
    type Action = HomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use HomeAction::*;
        match action {
            Perform { category, index, at_ms } => {
                let Some(deed) = category.deed(index) else { return self; };
                let mut new = (*self).clone();
                new.handle(category, deed, at_ms);
                Rc::new(new)
            }
            ResetSession => Rc::new(HomeState::new(self.config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ADDITIONAL_GOOD_DEEDS, BAD_DEEDS, MAIN_GOOD_DEEDS};

    fn click(state: Rc<HomeState>, category: Category, index: usize) -> Rc<HomeState> {
        state.reduce(HomeAction::Perform { category, index, at_ms: 0.0 })
    }

    #[test]
    fn good_click_scores_and_logs() {
        let s = click(Rc::new(HomeState::default()), Category::MainGood, 1);
        assert_eq!(s.main_good.totals().score, 15);
        assert_eq!(s.total_score(), 15);
        assert_eq!(s.level.total_score, 15);
        assert_eq!(s.level.level, 1);
        assert_eq!(s.streak, Streak { current: 1, best: 1 });
        let last = s.history.back().unwrap();
        assert_eq!(last.label, MAIN_GOOD_DEEDS[1].label);
        assert_eq!(last.outcome, ClickOutcome::Counted { count: 1, points: 15 });
    }

    #[test]
    fn unknown_index_is_noop() {
        let start = Rc::new(HomeState::default());
        let s = click(start.clone(), Category::Bad, BAD_DEEDS.len() + 3);
        assert!(Rc::ptr_eq(&start, &s));
    }

    #[test]
    fn bad_deed_lowers_score_without_level_change() {
        let mut s = Rc::new(HomeState::default());
        s = click(s, Category::MainGood, 0);
        s = click(s, Category::Bad, 0);
        assert_eq!(s.total_score(), 10 - 15);
        assert_eq!(s.level, LevelState { level: 1, total_score: -5 });
        assert_eq!(s.streak, Streak { current: 0, best: 1 });
    }

    #[test]
    fn levels_up_at_threshold_and_never_down() {
        let mut s = Rc::new(HomeState::default());
        // Quran recitation 15 x 3, Sunnah fasting 20 x 2, Clean the mosque 10 x 2 = 105
        for _ in 0..3 {
            s = click(s, Category::MainGood, 1);
        }
        for _ in 0..2 {
            s = click(s, Category::AdditionalGood, 2);
        }
        assert_eq!(s.level.level, 1);
        s = click(s, Category::AdditionalGood, 1);
        assert_eq!(s.total_score(), 95);
        assert_eq!(s.level.level, 1);
        s = click(s, Category::AdditionalGood, 1);
        assert_eq!(s.total_score(), 105);
        assert_eq!(s.level.level, 2);

        for _ in 0..5 {
            s = click(s, Category::Bad, 0);
        }
        assert_eq!(s.total_score(), 30);
        assert_eq!(s.level.level, 2);
        assert!(s.progress_percent() < 0.0);
    }

    #[test]
    fn level_monotonic_over_mixed_sequence() {
        let mut s = Rc::new(HomeState::default());
        let mut last_level = s.level.level;
        for step in 0..200usize {
            let category = Category::ALL[step % 3];
            let index = (step * 7) % category.deeds().len();
            s = click(s, category, index);
            assert!(s.level.level >= last_level);
            last_level = s.level.level;
            let sum: u32 = category.deeds().iter().map(|d| s.store(category).get(d.label).total_points).sum();
            assert_eq!(s.store(category).totals().score, sum);
        }
    }

    #[test]
    fn overflow_click_contributes_nothing() {
        let mut s = Rc::new(HomeState::default());
        let deed = ADDITIONAL_GOOD_DEEDS[3];
        s = click(s, Category::AdditionalGood, 3);
        assert_eq!(s.total_score(), i64::from(deed.points));
        s = click(s, Category::AdditionalGood, 3);
        assert_eq!(s.total_score(), 0);
        assert_eq!(s.history.back().map(|h| h.outcome), Some(ClickOutcome::Rollover));
    }

    #[test]
    fn history_is_bounded() {
        let config = GameConfig { history_limit: 3, ..GameConfig::default() };
        let mut s = Rc::new(HomeState::new(config));
        for i in 0..5 {
            s = s.reduce(HomeAction::Perform { category: Category::MainGood, index: 3, at_ms: i as f64 });
        }
        assert_eq!(s.history.len(), 3);
        assert_eq!(s.history.front().map(|h| h.at_ms), Some(2.0));
    }

    #[test]
    fn reset_keeps_config() {
        let config = GameConfig { next_level_score: 20, ..GameConfig::default() };
        let mut s = Rc::new(HomeState::new(config));
        s = click(s, Category::MainGood, 1);
        s = click(s, Category::MainGood, 1);
        assert_eq!(s.level.level, 2);
        let s = s.reduce(HomeAction::ResetSession);
        assert_eq!(*s, HomeState::new(config));
    }
}
