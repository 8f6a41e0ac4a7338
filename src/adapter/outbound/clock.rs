//! System clock adapter.

use chrono::{Local, NaiveTime};

use crate::port::outbound::clock::Clock;

/// Reads the host's local time. On Lambda this is UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}
