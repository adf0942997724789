// Per-deed counters and category aggregation
use crate::catalog::Deed;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeedCounter {
    pub count: u32,
    pub total_points: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    /// Sum of counts across the category.
    pub activity: u32,
    /// Sum of total_points across the category.
    pub score: u32,
}

/// What a single click did to its counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    Counted { count: u32, points: u32 },
    /// The cap was exceeded and the counter went back to zero.
    Rollover,
}

/// Counters for one category, keyed by deed label. Entries appear on first click.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CounterStore {
    counters: HashMap<&'static str, DeedCounter>,
    totals: CategoryTotals,
}

impl CounterStore {
    pub fn get(&self, label: &str) -> DeedCounter {
        self.counters.get(label).copied().unwrap_or_default()
    }

    pub fn totals(&self) -> CategoryTotals {
        self.totals
    }

    /// Applies one click on `deed` and recomputes the category totals.
    pub fn apply(&mut self, deed: &Deed) -> ClickOutcome {
        let current = self.get(deed.label);
        let tentative = current.count + 1;
        let (next, outcome) = if tentative > deed.max_frequency {
            (DeedCounter::default(), ClickOutcome::Rollover)
        } else {
            let next = DeedCounter {
                count: tentative,
                total_points: current.total_points + deed.points,
            };
            (next, ClickOutcome::Counted { count: next.count, points: next.total_points })
        };
        self.counters.insert(deed.label, next);
        self.totals = aggregate(self.counters.values());
        outcome
    }
}

/// Full reduce over every counter; no incremental bookkeeping.
pub fn aggregate<'a>(counters: impl IntoIterator<Item = &'a DeedCounter>) -> CategoryTotals {
    counters.into_iter().fold(CategoryTotals::default(), |acc, c| CategoryTotals {
        activity: acc.activity + c.count,
        score: acc.score + c.total_points,
    })
}

/// Pure reducer form of [`CounterStore::apply`].
pub fn reduce_category(store: &CounterStore, deed: &Deed) -> (CounterStore, ClickOutcome) {
    let mut next = store.clone();
    let outcome = next.apply(deed);
    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MAIN_GOOD_DEEDS};

    const TEN_BY_FOUR: Deed = Deed { label: "Test deed", points: 10, max_frequency: 4 };

    #[test]
    fn five_clicks_roll_over() {
        let mut store = CounterStore::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            store.apply(&TEN_BY_FOUR);
            let c = store.get(TEN_BY_FOUR.label);
            seen.push((c.count, c.total_points));
        }
        assert_eq!(seen, vec![(1, 10), (2, 20), (3, 30), (4, 40), (0, 0)]);
        assert_eq!(store.totals(), CategoryTotals::default());
    }

    #[test]
    fn rollover_outcome_reported() {
        let single = Deed { label: "Once", points: 15, max_frequency: 1 };
        let mut store = CounterStore::default();
        assert_eq!(store.apply(&single), ClickOutcome::Counted { count: 1, points: 15 });
        assert_eq!(store.apply(&single), ClickOutcome::Rollover);
        assert_eq!(store.apply(&single), ClickOutcome::Counted { count: 1, points: 15 });
    }

    #[test]
    fn points_scale_with_clicks_up_to_cap() {
        for deed in Category::ALL.iter().flat_map(|c| c.deeds()) {
            let mut store = CounterStore::default();
            assert_eq!(store.get(deed.label), DeedCounter::default());
            for k in 1..=deed.max_frequency {
                store.apply(deed);
                let c = store.get(deed.label);
                assert_eq!(c.count, k);
                assert_eq!(c.total_points, k * deed.points);
            }
            store.apply(deed);
            assert_eq!(store.get(deed.label), DeedCounter::default());
        }
    }

    #[test]
    fn totals_match_counters_after_every_click() {
        let mut store = CounterStore::default();
        // Walk the list several times so some deeds roll over mid-sequence.
        for round in 0..6 {
            for (i, deed) in MAIN_GOOD_DEEDS.iter().enumerate() {
                if (round + i) % 2 == 0 {
                    store.apply(deed);
                }
                let expected: u32 = MAIN_GOOD_DEEDS
                    .iter()
                    .map(|d| store.get(d.label).total_points)
                    .sum();
                let activity: u32 = MAIN_GOOD_DEEDS.iter().map(|d| store.get(d.label).count).sum();
                assert_eq!(store.totals().score, expected);
                assert_eq!(store.totals().activity, activity);
            }
        }
    }

    #[test]
    fn reduce_category_leaves_input_untouched() {
        let store = CounterStore::default();
        let (next, _) = reduce_category(&store, &TEN_BY_FOUR);
        assert_eq!(store.totals(), CategoryTotals::default());
        assert_eq!(next.totals(), CategoryTotals { activity: 1, score: 10 });
    }
}
