//! Error types for the dashboard library.

use thiserror::Error;

/// Errors raised while preparing the dashboard.
///
/// Rendering and the heartbeat itself never fail; these only come from
/// configuration and command-line input.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration sources could not be read or merged.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A duration string was not understood.
    #[error("Unknown duration format: {0}")]
    InvalidDuration(String),

    /// A strftime pattern contained an unsupported specifier.
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// An unrecognised theme name.
    #[error("Unknown theme: {0} (expected auto, dark or light)")]
    UnknownTheme(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, DashboardError>;
