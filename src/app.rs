//! Application state for the dashboard view.

use std::time::{Duration, Instant};

use tracing::info;

use crate::clock::Clock;
use crate::data::DashboardContent;
use crate::heartbeat::{HeartbeatClock, HeartbeatState};
use crate::ui::{Theme, ThemeKind};

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
///
/// Creating an `App` mounts the dashboard and starts its heartbeat. The
/// heartbeat is disposed by [`App::unmount`], or when the `App` is dropped.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub content: DashboardContent,
    pub heartbeat: HeartbeatClock<Box<dyn Clock>>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Mount the dashboard with the given clock, theme and heartbeat format.
    pub fn new(clock: Box<dyn Clock>, theme: Theme, time_format: &str) -> Self {
        Self {
            running: true,
            show_help: false,
            content: DashboardContent::default(),
            heartbeat: HeartbeatClock::with_format(clock, time_format),
            theme,
            status_message: None,
        }
    }

    /// Called once per loop iteration. Returns `true` if the heartbeat refreshed.
    pub fn on_tick(&mut self) -> bool {
        self.heartbeat.poll()
    }

    /// Tear the view down. No heartbeat ticks happen after this returns.
    pub fn unmount(&mut self) {
        self.running = false;
        if self.heartbeat.dispose() {
            info!("dashboard unmounted");
        }
    }

    /// Whether the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.heartbeat.state() == HeartbeatState::Active
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch between the dark and light palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let name = match self.theme.kind {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        };
        self.set_status_message(format!("Theme: {}", name));
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
