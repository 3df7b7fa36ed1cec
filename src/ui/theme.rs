//! Theme configuration for the TUI.
//!
//! Every presentation node reads its colors from a [`Theme`] through semantic
//! tokens (`card_background`, `accent`, ...). The dark palette is the
//! dashboard's slate/sky web palette; the light palette inverts it for
//! light terminals.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;
use serde::Deserialize;

use crate::data::Tone;
use crate::error::DashboardError;

/// Which palette to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick from the terminal's background luminance.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Auto => "auto",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }

    /// Build the theme for this choice.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeChoice::Auto => Theme::auto_detect(),
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeChoice {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeChoice::Auto),
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(DashboardError::UnknownTheme(other.to_string())),
        }
    }
}

/// Palette variant a [`Theme`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,
    /// Page background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Title, heartbeat and informational values.
    pub accent: Color,
    /// Secondary text: labels, card titles.
    pub muted: Color,
    /// Tertiary text: card captions.
    pub subtle: Color,
    /// Fill for cards and the event log panel.
    pub card_background: Color,
    /// Card borders and row separators.
    pub border: Color,
    /// Healthy-tone values.
    pub healthy: Color,
    /// Caution-tone values.
    pub caution: Color,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::Rgb(0x0f, 0x17, 0x2a),
            foreground: Color::Rgb(0xf8, 0xfa, 0xfc),
            accent: Color::Rgb(0x38, 0xbd, 0xf8),
            muted: Color::Rgb(0x94, 0xa3, 0xb8),
            subtle: Color::Rgb(0x64, 0x74, 0x8b),
            card_background: Color::Rgb(0x1e, 0x29, 0x3b),
            border: Color::Rgb(0x33, 0x41, 0x55),
            healthy: Color::Rgb(0x22, 0xc5, 0x5e),
            caution: Color::Rgb(0xf5, 0x9e, 0x0b),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::Rgb(0xf8, 0xfa, 0xfc),
            foreground: Color::Rgb(0x0f, 0x17, 0x2a),
            accent: Color::Rgb(0x02, 0x84, 0xc7),
            muted: Color::Rgb(0x47, 0x55, 0x69),
            subtle: Color::Rgb(0x64, 0x74, 0x8b),
            card_background: Color::Rgb(0xe2, 0xe8, 0xf0),
            border: Color::Rgb(0xcb, 0xd5, 0xe1),
            healthy: Color::Rgb(0x16, 0xa3, 0x4a),
            caution: Color::Rgb(0xd9, 0x77, 0x06),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Switch between dark and light.
    pub fn toggled(&self) -> Self {
        match self.kind {
            ThemeKind::Dark => Self::light(),
            ThemeKind::Light => Self::dark(),
        }
    }

    /// Text color for a content tone.
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Healthy => self.healthy,
            Tone::Accent => self.accent,
            Tone::Caution => self.caution,
        }
    }

    /// Get style for a content tone
    pub fn tone_style(&self, tone: Tone) -> Style {
        Style::default().fg(self.tone_color(tone))
    }

    /// Whole-page base style.
    pub fn page(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Base style for cards and panels.
    pub fn card(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.card_background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Uppercase card headings.
    pub fn card_heading(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// The big value in the middle of a card.
    pub fn card_value(&self, tone: Tone) -> Style {
        self.tone_style(tone).add_modifier(Modifier::BOLD)
    }

    pub fn caption(&self) -> Style {
        Style::default().fg(self.subtle)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn section_heading(&self) -> Style {
        Style::default().fg(self.foreground).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn heartbeat(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_uses_slate_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Rgb(15, 23, 42));
        assert_eq!(theme.card_background, Color::Rgb(30, 41, 59));
        assert_eq!(theme.accent, Color::Rgb(56, 189, 248));
    }

    #[test]
    fn test_tone_mapping() {
        let theme = Theme::dark();
        assert_eq!(theme.tone_color(Tone::Healthy), theme.healthy);
        assert_eq!(theme.tone_color(Tone::Accent), theme.accent);
        assert_eq!(theme.tone_color(Tone::Caution), theme.caution);
    }

    #[test]
    fn test_toggle_round_trips() {
        let theme = Theme::dark().toggled();
        assert_eq!(theme.kind, ThemeKind::Light);
        assert_eq!(theme.toggled().kind, ThemeKind::Dark);
    }

    #[test]
    fn test_theme_choice_parse() {
        assert_eq!("Dark".parse::<ThemeChoice>().unwrap(), ThemeChoice::Dark);
        assert_eq!(" light ".parse::<ThemeChoice>().unwrap(), ThemeChoice::Light);
        assert!("solarized".parse::<ThemeChoice>().is_err());
    }
}
