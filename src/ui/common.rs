//! Common UI components: header, status bar, help overlay and the
//! terminal-too-small notice.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::duration::format_countdown;

/// Render the header: title and compliance on the left, heartbeat on the right.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header = &app.content.header;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let time = app.heartbeat.last_scan_time();
    let right_width = heartbeat_column_width(header.heartbeat_caption, time);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);

    let title = vec![
        Line::from(vec![
            Span::styled(header.icon, theme.title()),
            Span::raw(" "),
            Span::styled(header.title, theme.title()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", header.compliance_label), theme.label()),
            Span::styled(
                header.compliance.text,
                theme.tone_style(header.compliance.tone),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(title), left);

    let heartbeat = vec![
        Line::styled(header.heartbeat_caption, theme.label()),
        Line::styled(time, theme.heartbeat()),
    ];
    frame.render_widget(
        Paragraph::new(heartbeat).alignment(Alignment::Right),
        right,
    );
}

/// Terminal columns needed for the heartbeat caption and time.
///
/// Uses display width, not byte length, so non-ASCII time formats are not
/// padded out.
pub fn heartbeat_column_width(caption: &str, time: &str) -> u16 {
    let width = Line::raw(caption).width().max(Line::raw(time).width());
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Render the status bar at the bottom.
///
/// Shows the countdown to the next heartbeat and the available keys, or a
/// temporary status message when one is pending.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.accent));
        frame.render_widget(paragraph, area);
        return;
    }

    let heartbeat = match app.heartbeat.next_tick_in() {
        Some(remaining) => format!("Next heartbeat in {}", format_countdown(remaining)),
        None => "Heartbeat stopped".to_string(),
    };
    let status = format!(" {} | t:theme ?:help q:quit", heartbeat);

    let paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(app.theme.subtle)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let help_text = vec![
        Line::styled("Keyboard Shortcuts", theme.title()),
        Line::from(""),
        Line::from("  t         Toggle light/dark theme"),
        Line::from("  ?         Show this help"),
        Line::from("  q / Esc   Quit"),
        Line::from("  Ctrl+C    Quit"),
        Line::from(""),
        Line::styled(
            "The heartbeat refreshes every 30 seconds.",
            theme.caption(),
        ),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.card());

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 46u16.min(area.width.saturating_sub(4));
    let help_height = 12u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Shown instead of the dashboard when the terminal cannot fit it.
pub fn render_too_small(frame: &mut Frame, app: &App, area: Rect, min: (u16, u16)) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, min.0, min.1
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.caution));
    let height = 5u16.min(area.height);
    let centered = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height) / 2,
        area.width,
        height,
    );
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_width_counts_columns() {
        assert_eq!(heartbeat_column_width("SYSTEM HEARTBEAT", "10:00:30 AM"), 16);
        assert_eq!(heartbeat_column_width("", "10:00:30 AM"), 11);
        // CJK glyphs are two columns but three bytes each
        assert_eq!(heartbeat_column_width("", "10時00分"), 8);
        assert_eq!(heartbeat_column_width("", "10h00·30"), 8);
    }
}
