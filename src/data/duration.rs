use std::time::Duration;

use crate::error::{DashboardError, Result};

/// Suffix to milliseconds multiplier (longer suffixes first so "ms" wins over "s")
const UNITS: &[(&str, f64)] = &[("ms", 1.0), ("s", 1_000.0), ("m", 60_000.0)];

/// Parse duration strings like "250ms", "1.5s", "2m"
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str
                .trim()
                .parse()
                .map_err(|_| DashboardError::InvalidDuration(s.to_string()))?;
            if !val.is_finite() || val < 0.0 {
                return Err(DashboardError::InvalidDuration(s.to_string()));
            }
            return Ok(Duration::from_micros((val * multiplier * 1_000.0) as u64));
        }
    }

    Err(DashboardError::InvalidDuration(s.to_string()))
}

/// Format a countdown for the status bar, rounded up to whole seconds.
pub fn format_countdown(d: Duration) -> String {
    let mut secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        secs += 1;
    }
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_milliseconds() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_duration(" 2m ").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn test_parse_rejects_unknown_suffix() {
        assert!(matches!(
            parse_duration("10h"),
            Err(DashboardError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(parse_duration("-1s").is_err());
    }

    #[test]
    fn test_format_countdown_rounds_up() {
        assert_eq!(format_countdown(Duration::from_millis(29_001)), "30s");
        assert_eq!(format_countdown(Duration::from_secs(0)), "0s");
        assert_eq!(format_countdown(Duration::from_secs(65)), "1m 05s");
    }
}
