//! Static deed catalog.
//!
//! Every deed the home page can record lives in one of three lists. The
//! lists are fixed at compile time; labels are unique within a list.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Deed {
    pub label: &'static str,
    /// Points added to the category score per counted click.
    pub points: u32,
    /// Clicks allowed per cycle before the counter rolls over. Always >= 1.
    pub max_frequency: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    MainGood,
    AdditionalGood,
    Bad,
}

pub static MAIN_GOOD_DEEDS: &[Deed] = &[
    Deed { label: "Congregational prayer", points: 10, max_frequency: 4 },
    Deed { label: "Quran recitation", points: 15, max_frequency: 3 },
    Deed { label: "Attend study circle", points: 12, max_frequency: 2 },
    Deed { label: "Give charity", points: 8, max_frequency: 5 },
    Deed { label: "Dhuha prayer", points: 10, max_frequency: 3 },
];

pub static ADDITIONAL_GOOD_DEEDS: &[Deed] = &[
    Deed { label: "Help parents", points: 5, max_frequency: 5 },
    Deed { label: "Clean the mosque", points: 10, max_frequency: 2 },
    Deed { label: "Sunnah fasting", points: 20, max_frequency: 2 },
    Deed { label: "Visit the sick", points: 15, max_frequency: 1 },
    Deed { label: "Memorize a verse", points: 7, max_frequency: 4 },
];

pub static BAD_DEEDS: &[Deed] = &[
    Deed { label: "Missed prayer", points: 15, max_frequency: 5 },
    Deed { label: "Lying", points: 10, max_frequency: 3 },
    Deed { label: "Backbiting", points: 10, max_frequency: 3 },
    Deed { label: "Wasting time online", points: 5, max_frequency: 4 },
];

impl Category {
    pub const ALL: [Category; 3] = [Category::MainGood, Category::AdditionalGood, Category::Bad];

    pub fn deeds(self) -> &'static [Deed] {
        match self {
            Category::MainGood => MAIN_GOOD_DEEDS,
            Category::AdditionalGood => ADDITIONAL_GOOD_DEEDS,
            Category::Bad => BAD_DEEDS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::MainGood => "Main Good Deeds",
            Category::AdditionalGood => "Additional Good Deeds",
            Category::Bad => "Bad Deeds",
        }
    }

    pub fn is_good(self) -> bool {
        !matches!(self, Category::Bad)
    }

    /// Accent colour used by the panels for this category.
    pub fn color(self) -> &'static str {
        match self {
            Category::MainGood => "#2ea043",
            Category::AdditionalGood => "#58a6ff",
            Category::Bad => "#f85149",
        }
    }

    pub fn deed(self, index: usize) -> Option<&'static Deed> {
        self.deeds().get(index)
    }
}

/// Highest score a category can hold: every deed clicked up to its cap.
pub fn max_possible_score(deeds: &[Deed]) -> u32 {
    deeds.iter().map(|d| d.points * d.max_frequency).sum()
}
