//! The system heartbeat: a "last scan" timestamp refreshed on a fixed schedule.
//!
//! The heartbeat is polled from the UI event loop rather than running on its
//! own thread. Each call to [`HeartbeatClock::poll`] checks whether the next
//! 30 second deadline has passed and, if so, re-reads the wall clock.
//!
//! ## Lifecycle
//!
//! ```text
//!   initialize()            dispose() / drop
//!  ─────────────▶  ACTIVE  ─────────────────▶  STOPPED
//!                  │    ▲
//!                  └────┘ poll() -> tick() every 30s
//! ```
//!
//! `STOPPED` is terminal. Once disposed, no amount of elapsed time changes the
//! displayed value.

use std::fmt::Write;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::clock::Clock;

/// Interval between heartbeat refreshes.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(30_000);

/// Default display format: 12-hour locale-style time, e.g. "10:00:30 AM".
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Whether the heartbeat schedule is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatState {
    /// Timer running; ticks fire every [`HEARTBEAT_INTERVAL`].
    Active,
    /// Timer cancelled. Terminal.
    Stopped,
}

/// Keeps a formatted "last scan" time current while the dashboard is shown.
///
/// Dropping the clock disposes it, so the schedule cannot outlive its owner.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use audit_armor::{HeartbeatClock, ManualClock};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let clock = ManualClock::starting_at(start);
/// let mut heartbeat = HeartbeatClock::initialize(clock.clone());
/// assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");
///
/// clock.advance(Duration::from_secs(30));
/// assert!(heartbeat.poll());
/// assert_eq!(heartbeat.last_scan_time(), "10:00:30 AM");
/// ```
#[derive(Debug)]
pub struct HeartbeatClock<C: Clock> {
    clock: C,
    format: String,
    last_scan_time: String,
    next_tick: Instant,
    ticks: u64,
    state: HeartbeatState,
}

impl<C: Clock> HeartbeatClock<C> {
    /// Mount the heartbeat using [`DEFAULT_TIME_FORMAT`].
    pub fn initialize(clock: C) -> Self {
        Self::with_format(clock, DEFAULT_TIME_FORMAT)
    }

    /// Mount the heartbeat with a custom strftime pattern.
    ///
    /// Patterns chrono cannot render against a local time (see
    /// [`crate::config::validate_time_format`]) fall back to
    /// [`DEFAULT_TIME_FORMAT`].
    pub fn with_format(clock: C, format: impl Into<String>) -> Self {
        let mut format = format.into();
        let now = clock.local_time();
        let last_scan_time = match render_time(&now, &format) {
            Some(time) => time,
            None => {
                warn!(format = %format, "unusable time format, using default");
                format = DEFAULT_TIME_FORMAT.to_string();
                now.format(DEFAULT_TIME_FORMAT).to_string()
            }
        };
        let next_tick = clock.now() + HEARTBEAT_INTERVAL;
        info!(time = %last_scan_time, "heartbeat mounted");
        Self {
            clock,
            format,
            last_scan_time,
            next_tick,
            ticks: 0,
            state: HeartbeatState::Active,
        }
    }

    /// Fire a tick if the next deadline has passed.
    ///
    /// Returns `true` when the displayed value was refreshed and the view
    /// should redraw. Missed intervals collapse into one tick.
    pub fn poll(&mut self) -> bool {
        if self.state == HeartbeatState::Stopped {
            return false;
        }
        let now = self.clock.now();
        if now < self.next_tick {
            return false;
        }
        while self.next_tick <= now {
            self.next_tick += HEARTBEAT_INTERVAL;
        }
        self.tick();
        true
    }

    /// Re-read the wall clock into the displayed value.
    fn tick(&mut self) {
        let now = self.clock.local_time();
        self.last_scan_time = render_time(&now, &self.format)
            .unwrap_or_else(|| now.format(DEFAULT_TIME_FORMAT).to_string());
        self.ticks += 1;
        debug!(time = %self.last_scan_time, ticks = self.ticks, "heartbeat tick");
    }

    /// Cancel the schedule. Returns `false` if it was already stopped.
    pub fn dispose(&mut self) -> bool {
        if self.state == HeartbeatState::Stopped {
            return false;
        }
        self.state = HeartbeatState::Stopped;
        info!(ticks = self.ticks, "heartbeat disposed");
        true
    }

    /// The formatted time of the last refresh.
    pub fn last_scan_time(&self) -> &str {
        &self.last_scan_time
    }

    pub fn state(&self) -> HeartbeatState {
        self.state
    }

    /// Number of ticks fired since mount.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Time left until the next tick, or `None` once stopped.
    pub fn next_tick_in(&self) -> Option<Duration> {
        match self.state {
            HeartbeatState::Active => {
                Some(self.next_tick.saturating_duration_since(self.clock.now()))
            }
            HeartbeatState::Stopped => None,
        }
    }
}

/// Format `time`, or `None` if the pattern cannot be rendered.
fn render_time(time: &NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(format)).ok()?;
    Some(out)
}

impl<C: Clock> Drop for HeartbeatClock<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ten_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn mounted() -> (ManualClock, HeartbeatClock<ManualClock>) {
        let clock = ManualClock::starting_at(ten_am());
        let heartbeat = HeartbeatClock::initialize(clock.clone());
        (clock, heartbeat)
    }

    #[test]
    fn test_initialize_captures_mount_time() {
        let (_, heartbeat) = mounted();
        assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");
        assert_eq!(heartbeat.state(), HeartbeatState::Active);
        assert_eq!(heartbeat.tick_count(), 0);
    }

    #[test]
    fn test_no_tick_before_interval() {
        let (clock, mut heartbeat) = mounted();
        for _ in 0..29 {
            clock.advance(Duration::from_secs(1));
            assert!(!heartbeat.poll());
            assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");
        }
        clock.advance(Duration::from_millis(999));
        assert!(!heartbeat.poll());
        assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");
    }

    #[test]
    fn test_tick_after_one_interval() {
        let (clock, mut heartbeat) = mounted();
        clock.advance(HEARTBEAT_INTERVAL);

        assert!(heartbeat.poll());
        assert_eq!(heartbeat.last_scan_time(), "10:00:30 AM");
        assert_eq!(heartbeat.tick_count(), 1);

        // Polling again without time passing does nothing
        assert!(!heartbeat.poll());
        assert_eq!(heartbeat.tick_count(), 1);
    }

    #[test]
    fn test_mount_tick_dispose_scenario() {
        let (clock, mut heartbeat) = mounted();
        assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");

        clock.advance(Duration::from_secs(30));
        heartbeat.poll();
        assert_eq!(heartbeat.last_scan_time(), "10:00:30 AM");

        assert!(heartbeat.dispose());
        clock.advance(Duration::from_secs(60));
        assert!(!heartbeat.poll());
        assert_eq!(heartbeat.last_scan_time(), "10:00:30 AM");
        assert_eq!(heartbeat.state(), HeartbeatState::Stopped);
    }

    #[test]
    fn test_dispose_is_one_way() {
        let (_, mut heartbeat) = mounted();
        assert!(heartbeat.dispose());
        assert!(!heartbeat.dispose());
        assert_eq!(heartbeat.state(), HeartbeatState::Stopped);
        assert_eq!(heartbeat.next_tick_in(), None);
    }

    #[test]
    fn test_missed_intervals_coalesce() {
        let (clock, mut heartbeat) = mounted();
        clock.advance(Duration::from_secs(95));

        assert!(heartbeat.poll());
        assert_eq!(heartbeat.tick_count(), 1);
        assert_eq!(heartbeat.last_scan_time(), "10:01:35 AM");

        // Schedule stays aligned to the mount time: next tick at 120s
        assert_eq!(heartbeat.next_tick_in(), Some(Duration::from_secs(25)));
    }

    #[test]
    fn test_displayed_time_never_decreases() {
        let (clock, mut heartbeat) = mounted();
        let mut previous = clock.local_time();
        for _ in 0..5 {
            clock.advance(HEARTBEAT_INTERVAL);
            heartbeat.poll();
            let current = clock.local_time();
            assert!(current >= previous);
            assert_eq!(
                heartbeat.last_scan_time(),
                current.format(DEFAULT_TIME_FORMAT).to_string()
            );
            previous = current;
        }
        assert_eq!(heartbeat.tick_count(), 5);
    }

    #[test]
    fn test_custom_format() {
        let clock = ManualClock::starting_at(ten_am());
        let heartbeat = HeartbeatClock::with_format(clock, "%H:%M");
        assert_eq!(heartbeat.last_scan_time(), "10:00");
    }

    #[test]
    fn test_timezone_format_falls_back_to_default() {
        let clock = ManualClock::starting_at(ten_am());
        let mut heartbeat = HeartbeatClock::with_format(clock.clone(), "%H:%M:%S %Z");
        assert_eq!(heartbeat.last_scan_time(), "10:00:00 AM");

        clock.advance(HEARTBEAT_INTERVAL);
        assert!(heartbeat.poll());
        assert_eq!(heartbeat.last_scan_time(), "10:00:30 AM");
    }

    #[test]
    fn test_next_tick_countdown() {
        let (clock, heartbeat) = mounted();
        assert_eq!(heartbeat.next_tick_in(), Some(HEARTBEAT_INTERVAL));
        clock.advance(Duration::from_secs(12));
        assert_eq!(heartbeat.next_tick_in(), Some(Duration::from_secs(18)));
    }
}
