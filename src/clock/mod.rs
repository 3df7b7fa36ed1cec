//! Time source abstraction for the heartbeat.
//!
//! The heartbeat needs two readings: a monotonic instant to schedule ticks
//! against, and the local wall-clock time to display. Both come from a
//! [`Clock`] so the schedule can be driven by simulated time in tests.

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

use std::fmt::Debug;
use std::time::Instant;

use chrono::NaiveDateTime;

/// Trait for reading the current time.
///
/// # Example
///
/// ```
/// use audit_armor::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let shown = clock.local_time().format("%H:%M:%S").to_string();
/// assert_eq!(shown.len(), 8);
/// ```
pub trait Clock: Send + Debug {
    /// Monotonic reading used for scheduling.
    fn now(&self) -> Instant;

    /// Wall-clock time in the local timezone, used for display.
    fn local_time(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn local_time(&self) -> NaiveDateTime {
        (**self).local_time()
    }
}
