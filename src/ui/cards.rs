//! Summary card grid.
//!
//! Cards flow into as many equal-width columns as fit at [`MIN_CARD_WIDTH`],
//! wrapping onto further rows when the terminal is narrow.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::data::Card;
use crate::ui::Theme;

/// Narrowest a card may get before the grid drops a column.
pub const MIN_CARD_WIDTH: u16 = 28;

/// Rows taken by one card: border, heading, gap, value, caption, border.
pub const CARD_HEIGHT: u16 = 6;

/// Horizontal gap between cards.
const GAP: u16 = 2;

/// Number of columns for `count` cards in `width` terminal cells.
pub fn grid_columns(width: u16, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let fits = (width.saturating_add(GAP) / (MIN_CARD_WIDTH + GAP)).max(1) as usize;
    fits.min(count)
}

/// Total height the grid needs at this width.
pub fn grid_height(width: u16, count: usize) -> u16 {
    let columns = grid_columns(width, count);
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns) as u16 * CARD_HEIGHT
}

/// Render all cards into `area`.
pub fn render(frame: &mut Frame, theme: &Theme, cards: &[Card], area: Rect) {
    let columns = grid_columns(area.width, cards.len());
    if columns == 0 {
        return;
    }

    let row_count = cards.len().div_ceil(columns);
    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); row_count]).split(area);

    for (row_area, row_cards) in rows.iter().zip(cards.chunks(columns)) {
        // Keep every column the same width even on a short last row
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(GAP)
            .split(*row_area);
        for (cell, card) in cells.iter().zip(row_cards) {
            render_card(frame, theme, card, *cell);
        }
    }
}

fn render_card(frame: &mut Frame, theme: &Theme, card: &Card, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style())
        .style(theme.card())
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::styled(card.title.to_uppercase(), theme.card_heading()),
        Line::raw(""),
        Line::styled(card.value.text, theme.card_value(card.value.tone)),
        Line::styled(card.caption, theme.caption()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
