//! Data models for the dashboard.
//!
//! ## Submodules
//!
//! - [`dashboard`]: The static content of the canonical view ([`DashboardContent`])
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "250ms", "30s")

pub mod dashboard;
pub mod duration;

pub use dashboard::{Card, DashboardContent, Header, SecurityEvent, Status, Tone, DASHBOARD};
