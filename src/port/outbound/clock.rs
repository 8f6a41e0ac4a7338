//! Wall-clock port.

use chrono::NaiveTime;

/// Source of the current local time of day.
pub trait Clock: Send + Sync {
    fn time_of_day(&self) -> NaiveTime;
}
