//! "Recent Security Events" panel: one row per event, label on the left and
//! status on the right, separated by thin rules.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::data::SecurityEvent;
use crate::ui::Theme;

/// Height of the panel for `count` events (rows, separators and borders).
pub fn panel_height(count: usize) -> u16 {
    let rows = (count * 2).saturating_sub(1) as u16;
    rows + 2
}

pub fn render(frame: &mut Frame, theme: &Theme, title: &str, events: &[SecurityEvent], area: Rect) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), theme.section_heading()))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style())
        .style(theme.card())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if events.is_empty() {
        return;
    }

    let mut constraints = Vec::with_capacity(events.len() * 2);
    for i in 0..events.len() {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
    }
    let slots = Layout::vertical(constraints).split(inner);

    for (i, event) in events.iter().enumerate() {
        let row = slots[i * 2];
        let label = Paragraph::new(Line::styled(event.label, theme.label()));
        let status = Paragraph::new(Line::styled(
            event.status.text,
            theme.tone_style(event.status.tone),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(label, row);
        frame.render_widget(status, row);

        if let Some(separator) = slots.get(i * 2 + 1) {
            let rule = "─".repeat(separator.width as usize);
            frame.render_widget(
                Paragraph::new(Line::styled(rule, theme.border_style())),
                *separator,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height() {
        // 3 rows + 2 separators + 2 borders
        assert_eq!(panel_height(3), 7);
        assert_eq!(panel_height(1), 3);
        assert_eq!(panel_height(0), 2);
    }
}
