// Achievement medal selection from percentage of the category maximum
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    pub fn icon(self) -> &'static str {
        match self {
            Medal::Bronze => "🥉",
            Medal::Silver => "🥈",
            Medal::Gold => "🥇",
            Medal::Platinum => "🏆",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub medal: Medal,
    /// Icons to render, 1..=3.
    pub icons: u8,
}

// (band upper bound, medal, sub-tier upper bounds for 1 and 2 icons)
const BANDS: [(f64, Medal, f64, f64); 4] = [
    (30.0, Medal::Bronze, 10.0, 20.0),
    (60.0, Medal::Silver, 40.0, 50.0),
    (90.0, Medal::Gold, 70.0, 80.0),
    (f64::INFINITY, Medal::Platinum, 93.0, 96.0),
];

pub fn percentage(score: u32, max_possible: u32) -> f64 {
    if max_possible == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(max_possible) * 100.0
}

/// `None` until the category has any score at all.
pub fn select(pct: f64) -> Option<Achievement> {
    if pct.is_nan() || pct <= 0.0 {
        return None;
    }
    let (_, medal, one, two) = BANDS.iter().copied().find(|(upper, ..)| pct <= *upper)?;
    let icons = if pct <= one {
        1
    } else if pct <= two {
        2
    } else {
        3
    };
    Some(Achievement { medal, icons })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{max_possible_score, MAIN_GOOD_DEEDS};

    #[test]
    fn full_main_score_is_top_tier() {
        let max = max_possible_score(MAIN_GOOD_DEEDS);
        let pct = percentage(179, max);
        assert!((pct - 100.0).abs() < 1e-9);
        assert_eq!(select(pct), Some(Achievement { medal: Medal::Platinum, icons: 3 }));
    }

    #[test]
    fn nothing_below_zero_or_at_zero() {
        assert_eq!(select(0.0), None);
        assert_eq!(select(-5.0), None);
        assert_eq!(select(f64::NAN), None);
        assert_eq!(percentage(10, 0), 0.0);
    }

    #[test]
    fn band_edges() {
        let cases = [
            (0.5, Medal::Bronze, 1),
            (10.0, Medal::Bronze, 1),
            (15.0, Medal::Bronze, 2),
            (30.0, Medal::Bronze, 3),
            (31.0, Medal::Silver, 1),
            (45.0, Medal::Silver, 2),
            (60.0, Medal::Silver, 3),
            (61.0, Medal::Gold, 1),
            (75.0, Medal::Gold, 2),
            (85.0, Medal::Gold, 3),
            (91.0, Medal::Platinum, 1),
            (95.0, Medal::Platinum, 2),
            (97.0, Medal::Platinum, 3),
        ];
        for (pct, medal, icons) in cases {
            assert_eq!(select(pct), Some(Achievement { medal, icons }), "pct {pct}");
        }
    }
}
