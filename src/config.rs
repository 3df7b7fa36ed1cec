//! Dashboard configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `AUDIT_ARMOR_*` environment variables, then command-line flags.
//!
//! ```toml
//! theme = "dark"
//! tick_rate = "250ms"
//! time_format = "%H:%M:%S"
//! log_file = "audit-armor.log"
//! ```

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::data::duration::parse_duration;
use crate::error::{DashboardError, Result};
use crate::heartbeat::DEFAULT_TIME_FORMAT;
use crate::ui::ThemeChoice;

/// Prefix for environment overrides (e.g. `AUDIT_ARMOR_THEME=light`).
pub const ENV_PREFIX: &str = "AUDIT_ARMOR";

/// Default UI input poll rate.
pub const DEFAULT_TICK_RATE: &str = "250ms";

/// Resolved dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// Color theme selection.
    pub theme: ThemeChoice,
    /// How long the UI waits for input before redrawing (e.g. "250ms").
    pub tick_rate: String,
    /// strftime pattern for the heartbeat clock.
    pub time_format: String,
    /// Where to write logs while the TUI owns the terminal.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            tick_rate: DEFAULT_TICK_RATE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub theme: Option<ThemeChoice>,
    pub tick_rate: Option<String>,
    pub time_format: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Load configuration from defaults, an optional file, and the environment.
    ///
    /// A missing file is an error only when a path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("theme", defaults.theme.as_str())?
            .set_default("tick_rate", defaults.tick_rate)?
            .set_default("time_format", defaults.time_format)?;

        if let Some(path) = path {
            debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder.add_source(env).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(tick_rate) = overrides.tick_rate {
            self.tick_rate = tick_rate;
        }
        if let Some(time_format) = overrides.time_format {
            self.time_format = time_format;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that every string setting parses.
    pub fn validate(&self) -> Result<()> {
        self.tick_rate()?;
        validate_time_format(&self.time_format)
    }

    /// The UI poll rate as a duration.
    pub fn tick_rate(&self) -> Result<Duration> {
        let rate = parse_duration(&self.tick_rate)?;
        if rate.is_zero() {
            return Err(DashboardError::InvalidDuration(self.tick_rate.clone()));
        }
        Ok(rate)
    }
}

/// Reject strftime patterns that chrono cannot render.
///
/// The heartbeat formats an offset-less local `NaiveDateTime`, so besides
/// unknown specifiers this also rejects anything needing a timezone
/// (`%Z`, `%z`, `%:z`, `%+`, ...). The pattern is test-rendered once here.
pub fn validate_time_format(format: &str) -> Result<()> {
    let invalid = || DashboardError::InvalidTimeFormat(format.to_string());
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::default().format(format)).map_err(|_| invalid())?;
    Ok(())
}
