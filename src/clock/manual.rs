//! Simulated clock.
//!
//! Time only moves when [`ManualClock::advance`] is called. Clones share the
//! same underlying time, so a test can hand one clone to the heartbeat and
//! keep another to drive it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use super::Clock;

#[derive(Debug)]
struct State {
    origin: Instant,
    start: NaiveDateTime,
    elapsed: Duration,
    /// Last representable monotonic reading; `now()` never goes backwards.
    latest: Instant,
}

/// A clock that starts at a fixed local time and advances on request.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use audit_armor::{Clock, ManualClock};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let clock = ManualClock::starting_at(start);
/// let driver = clock.clone();
///
/// driver.advance(Duration::from_secs(30));
/// assert_eq!(clock.local_time().format("%H:%M:%S").to_string(), "10:00:30");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Arc<Mutex<State>>,
}

impl ManualClock {
    /// Create a clock reading `start` until advanced.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        let origin = Instant::now();
        Self {
            state: Arc::new(Mutex::new(State {
                origin,
                start,
                elapsed: Duration::ZERO,
                latest: origin,
            })),
        }
    }

    /// Move both the monotonic and the wall-clock reading forward.
    ///
    /// Elapsed time saturates. Readings past what `Instant` or
    /// `NaiveDateTime` can hold stay pinned at the furthest value reached.
    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.elapsed = state.elapsed.saturating_add(by);
        if let Some(latest) = state.origin.checked_add(state.elapsed) {
            state.latest = latest;
        }
    }

    /// Total simulated time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.lock().elapsed
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state is plain data; a poisoned lock still holds a valid value.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.lock().latest
    }

    fn local_time(&self) -> NaiveDateTime {
        let state = self.lock();
        chrono::Duration::from_std(state.elapsed)
            .ok()
            .and_then(|delta| state.start.checked_add_signed(delta))
            .unwrap_or(NaiveDateTime::MAX)
    }
}
