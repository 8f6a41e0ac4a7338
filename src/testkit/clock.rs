use chrono::NaiveTime;

use crate::port::outbound::clock::Clock;

/// Clock frozen at a single time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// # Panics
    ///
    /// Panics if the components do not form a valid time.
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, second).expect("valid time of day"))
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.0
    }
}
