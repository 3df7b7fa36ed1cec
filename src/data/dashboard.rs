//! The static content of the security dashboard.
//!
//! Every value shown on screen apart from the heartbeat clock lives here as a
//! literal. Nothing is computed, fetched, or validated: the "Railway Backend"
//! and certificate rows are decorative labels, not live checks.

use serde::Serialize;

/// Semantic color class of a displayed value.
///
/// The theme decides what each tone looks like; content never names a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Good news: secure, valid, passed.
    Healthy,
    /// Informational highlight.
    Accent,
    /// Worth a glance, not an alarm.
    Caution,
}

/// A value with the tone it should be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub text: &'static str,
    pub tone: Tone,
}

impl Status {
    pub const fn new(text: &'static str, tone: Tone) -> Self {
        Self { text, tone }
    }
}

/// Title row of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Shield glyph drawn before the title. Text presentation, no variation
    /// selector, so terminals agree on its width.
    pub icon: &'static str,
    pub title: &'static str,
    pub compliance_label: &'static str,
    pub compliance: Status,
    pub heartbeat_caption: &'static str,
}

/// One card in the summary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub value: Status,
    pub caption: &'static str,
}

/// One row in the security event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityEvent {
    pub label: &'static str,
    pub status: Status,
}

/// The whole canonical dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardContent {
    pub header: Header,
    pub cards: &'static [Card],
    pub events_title: &'static str,
    pub events: &'static [SecurityEvent],
}

const CARDS: &[Card] = &[
    Card {
        title: "Threat Level",
        value: Status::new("LOW", Tone::Healthy),
        caption: "Perimeter scans normal",
    },
    Card {
        title: "Railway Backend",
        value: Status::new("CONNECTED", Tone::Accent),
        caption: "Latency: 14ms",
    },
];

const EVENTS: &[SecurityEvent] = &[
    SecurityEvent {
        label: "SSL Certificate Verification",
        status: Status::new("VALID", Tone::Healthy),
    },
    SecurityEvent {
        label: "Database Integrity Check",
        status: Status::new("PASSED", Tone::Healthy),
    },
    SecurityEvent {
        label: "Unauthorized Login Attempts",
        status: Status::new("0", Tone::Caution),
    },
];

/// The dashboard as shipped.
pub const DASHBOARD: DashboardContent = DashboardContent {
    header: Header {
        icon: "\u{1F6E1}",
        title: "Audit Armor",
        compliance_label: "Bermuda PIPA Compliance",
        compliance: Status::new("SECURE", Tone::Healthy),
        heartbeat_caption: "SYSTEM HEARTBEAT",
    },
    cards: CARDS,
    events_title: "Recent Security Events",
    events: EVENTS,
};

impl Default for DashboardContent {
    fn default() -> Self {
        DASHBOARD
    }
}

impl DashboardContent {
    /// Look up a card by its title (case-insensitive).
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.title.eq_ignore_ascii_case(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_level_is_low() {
        let card = DASHBOARD.card("threat level").unwrap();
        assert_eq!(card.value.text, "LOW");
        assert_eq!(card.value.tone, Tone::Healthy);
    }

    #[test]
    fn test_event_log_has_three_rows() {
        let labels: Vec<&str> = DASHBOARD.events.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "SSL Certificate Verification",
                "Database Integrity Check",
                "Unauthorized Login Attempts",
            ]
        );
    }

    #[test]
    fn test_header_has_no_variation_selector() {
        let header = DASHBOARD.header;
        assert_eq!(header.title, "Audit Armor");
        assert_eq!(header.icon.chars().count(), 1);
        assert!(!header.icon.contains('\u{FE0F}'));
        assert!(!header.title.contains('\u{FE0F}'));
    }

    #[test]
    fn test_json_uses_lowercase_tones() {
        let json = serde_json::to_value(DASHBOARD).unwrap();
        assert_eq!(json["header"]["compliance"]["text"], "SECURE");
        assert_eq!(json["cards"][1]["value"]["tone"], "accent");
        assert_eq!(json["events"][2]["status"]["tone"], "caution");
    }
}
