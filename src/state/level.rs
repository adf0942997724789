// Level and progress calculation
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    pub total_score: i64,
}

impl Default for LevelState {
    fn default() -> Self {
        Self { level: 1, total_score: 0 }
    }
}

pub fn total_score(main_good: u32, additional_good: u32, bad: u32) -> i64 {
    i64::from(main_good) + i64::from(additional_good) - i64::from(bad)
}

impl LevelState {
    /// Records a new total and levels up once if it meets `threshold`.
    /// The threshold is flat: it is not raised after a level-up.
    pub fn check_level_up(self, total_score: i64, threshold: i64) -> Self {
        let level = if total_score >= threshold { self.level.saturating_add(1) } else { self.level };
        Self { level, total_score }
    }

    /// Records a new total without any level change (bad deeds).
    pub fn with_score(self, total_score: i64) -> Self {
        Self { total_score, ..self }
    }

    /// `(total - level * step) / step * 100`. Not clamped: it goes negative
    /// once the level floor passes the score and can exceed 100.
    pub fn progress_percent(&self, step: i64) -> f64 {
        if step == 0 {
            return 0.0;
        }
        let floor = i64::from(self.level) * step;
        (self.total_score - floor) as f64 / step as f64 * 100.0
    }
}

/// Width for a progress bar; the only place progress gets clamped.
pub fn bar_percent(progress: f64) -> f64 {
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 100.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let s = LevelState::default();
        assert_eq!(s.level, 1);
        assert_eq!(s.total_score, 0);
    }

    #[test]
    fn levels_once_per_check_at_threshold() {
        let s = LevelState::default().check_level_up(99, 100);
        assert_eq!(s.level, 1);
        let s = s.check_level_up(100, 100);
        assert_eq!(s.level, 2);
        // Flat threshold: every further check above it levels again.
        let s = s.check_level_up(110, 100);
        assert_eq!(s.level, 3);
    }

    #[test]
    fn score_only_update_keeps_level() {
        let s = LevelState { level: 4, total_score: 250 }.with_score(-20);
        assert_eq!(s, LevelState { level: 4, total_score: -20 });
    }

    #[test]
    fn progress_is_unclamped() {
        let s = LevelState { level: 1, total_score: 150 };
        assert!((s.progress_percent(100) - 50.0).abs() < 1e-9);
        let s = LevelState { level: 2, total_score: 100 };
        assert!((s.progress_percent(100) + 100.0).abs() < 1e-9);
        let s = LevelState { level: 1, total_score: 350 };
        assert!((s.progress_percent(100) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn bar_clamps() {
        assert_eq!(bar_percent(-100.0), 0.0);
        assert_eq!(bar_percent(250.0), 100.0);
        assert_eq!(bar_percent(42.5), 42.5);
        assert_eq!(bar_percent(f64::NAN), 0.0);
    }

    #[test]
    fn total_subtracts_bad() {
        assert_eq!(total_score(40, 10, 75), -25);
    }
}
