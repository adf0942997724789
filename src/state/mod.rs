pub mod achievement;
pub mod counters;
pub mod level;
pub mod settings;

pub use counters::{ClickOutcome, CounterStore};
pub use settings::Settings;
