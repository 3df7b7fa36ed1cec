use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use super::Clock;

/// The real clock: `Instant::now()` and the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
