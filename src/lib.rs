//! # audit-armor
//!
//! A terminal security-status dashboard with a live heartbeat clock.
//!
//! The page shows a fixed set of status labels (compliance, threat level,
//! backend connectivity, recent security events) next to a "system heartbeat"
//! timestamp that refreshes every 30 seconds while the dashboard is open. The
//! status labels are static placeholders; no scanning or backend checks run.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Application                        │
//! │  ┌─────────┐    ┌───────────┐    ┌─────────┐    ┌──────┐ │
//! │  │  app    │───▶│ heartbeat │    │   ui    │───▶│ Term │ │
//! │  │ (state) │───────────────────▶│(render) │    │      │ │
//! │  └────┬────┘    └─────┬─────┘    └────▲────┘    └──────┘ │
//! │       │               │               │                  │
//! │       ▼               ▼               │                  │
//! │  ┌─────────┐    ┌───────────┐    ┌────┴────┐             │
//! │  │ events  │    │   clock   │    │  data   │             │
//! │  │ (input) │    │ (time src)│    │(content)│             │
//! │  └─────────┘    └───────────┘    └─────────┘             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`heartbeat`]**: The [`HeartbeatClock`] and its `ACTIVE → STOPPED` lifecycle
//! - **[`clock`]**: Time source abstraction ([`Clock`] trait) with the real
//!   [`SystemClock`] and a simulated [`ManualClock`]
//! - **[`data`]**: The static dashboard content and duration helpers
//! - **[`ui`]**: ratatui rendering and the shared [`Theme`]
//! - **[`app`]**, **[`events`]**: View state and keyboard handling
//! - **[`config`]**: Layered configuration (defaults, file, environment)
//!
//! ## Usage
//!
//! ```bash
//! audit-armor                      # interactive dashboard
//! audit-armor --theme light        # force a palette
//! audit-armor --print              # render one frame to stdout
//! audit-armor --json               # dump the dashboard content
//! ```
//!
//! ### As a library
//!
//! ```
//! use audit_armor::{App, SystemClock, Theme, DEFAULT_TIME_FORMAT};
//!
//! let app = App::new(Box::new(SystemClock), Theme::dark(), DEFAULT_TIME_FORMAT);
//! let screen = audit_armor::ui::render_to_string(&app, 80, 24).unwrap();
//! assert!(screen.contains("THREAT LEVEL"));
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod heartbeat;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DashboardConfig, Overrides};
pub use data::{DashboardContent, Tone, DASHBOARD};
pub use error::DashboardError;
pub use heartbeat::{HeartbeatClock, HeartbeatState, DEFAULT_TIME_FORMAT, HEARTBEAT_INTERVAL};
pub use ui::{Theme, ThemeChoice};
