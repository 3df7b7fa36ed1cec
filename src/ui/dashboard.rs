//! Top-level layout of the dashboard page.

use std::io;

use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Layout, Margin},
    widgets::Block,
    Frame, Terminal,
};

use super::{cards, common, security_log};
use crate::app::App;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 16;

/// Header rows: title, compliance line, bottom rule.
const HEADER_HEIGHT: u16 = 3;

/// Render the whole dashboard into the frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(app.theme.page()), area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, app, area, (MIN_WIDTH, MIN_HEIGHT));
        return;
    }

    let [page, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let page = page.inner(Margin::new(2, 0));

    let content = &app.content;
    let [header, grid, _, log, _] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(cards::grid_height(page.width, content.cards.len())),
        Constraint::Length(1),
        Constraint::Length(security_log::panel_height(content.events.len())),
        Constraint::Min(0),
    ])
    .areas(page);

    common::render_header(frame, app, header);
    cards::render(frame, &app.theme, content.cards, grid);
    security_log::render(
        frame,
        &app.theme,
        content.events_title,
        content.events,
        log,
    );
    common::render_status_bar(frame, app, status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Render one frame off-screen and return it as plain text.
///
/// Trailing spaces are trimmed from each line. Styling is discarded.
pub fn render_to_string(app: &App, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| draw(frame, app))?;

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::heartbeat::{DEFAULT_TIME_FORMAT, HEARTBEAT_INTERVAL};
    use crate::ui::Theme;
    use chrono::NaiveDate;

    fn mounted() -> (ManualClock, App) {
        let start = NaiveDate::from_ymd_opt(2026, 1, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = ManualClock::starting_at(start);
        let app = App::new(Box::new(clock.clone()), Theme::dark(), DEFAULT_TIME_FORMAT);
        (clock, app)
    }

    fn line_with<'a>(screen: &'a str, needle: &str) -> &'a str {
        screen
            .lines()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{screen}"))
    }

    #[test]
    fn test_threat_level_renders_low() {
        let (_, app) = mounted();
        let screen = render_to_string(&app, 80, 24).unwrap();
        assert!(screen.contains("THREAT LEVEL"));
        assert!(screen.contains("LOW"));
        assert!(screen.contains("Perimeter scans normal"));
    }

    #[test]
    fn test_full_page_snapshot_contents() {
        let (_, app) = mounted();
        let screen = render_to_string(&app, 80, 24).unwrap();

        assert!(screen.contains("Audit Armor"));
        assert!(screen.contains("Bermuda PIPA Compliance: SECURE"));
        assert!(screen.contains("SYSTEM HEARTBEAT"));
        assert!(screen.contains("10:00:00 AM"));
        assert!(screen.contains("RAILWAY BACKEND"));
        assert!(screen.contains("CONNECTED"));
        assert!(screen.contains("Latency: 14ms"));
        assert!(screen.contains("Recent Security Events"));

        let ssl = line_with(&screen, "SSL Certificate Verification");
        assert!(ssl.contains("VALID"));
        let db = line_with(&screen, "Database Integrity Check");
        assert!(db.contains("PASSED"));
        let logins = line_with(&screen, "Unauthorized Login Attempts");
        assert!(logins.trim_end_matches(['│', '╯', ' ']).ends_with('0'));
    }

    #[test]
    fn test_cards_side_by_side_when_wide() {
        let (_, app) = mounted();
        let screen = render_to_string(&app, 80, 24).unwrap();
        let row = line_with(&screen, "THREAT LEVEL");
        assert!(row.contains("RAILWAY BACKEND"));
    }

    #[test]
    fn test_cards_stack_when_narrow() {
        let (_, app) = mounted();
        let screen = render_to_string(&app, 44, 30).unwrap();
        let row = line_with(&screen, "THREAT LEVEL");
        assert!(!row.contains("RAILWAY BACKEND"));
        assert!(screen.contains("RAILWAY BACKEND"));
    }

    #[test]
    fn test_heartbeat_updates_on_screen() {
        let (clock, mut app) = mounted();
        clock.advance(HEARTBEAT_INTERVAL);
        app.on_tick();
        let screen = render_to_string(&app, 80, 24).unwrap();
        assert!(screen.contains("10:00:30 AM"));
        assert!(!screen.contains("10:00:00 AM"));
    }

    #[test]
    fn test_status_bar_countdown() {
        let (clock, app) = mounted();
        clock.advance(std::time::Duration::from_secs(12));
        let screen = render_to_string(&app, 80, 24).unwrap();
        assert!(screen.contains("Next heartbeat in 18s"));
    }

    #[test]
    fn test_status_bar_after_unmount() {
        let (_, mut app) = mounted();
        app.unmount();
        let screen = render_to_string(&app, 80, 24).unwrap();
        assert!(screen.contains("Heartbeat stopped"));
    }

    #[test]
    fn test_too_small_guard() {
        let (_, app) = mounted();
        let screen = render_to_string(&app, 30, 10).unwrap();
        assert!(screen.contains("Terminal too small: 30x10"));
        assert!(!screen.contains("THREAT LEVEL"));
    }

    #[test]
    fn test_help_overlay() {
        let (_, mut app) = mounted();
        app.toggle_help();
        let screen = render_to_string(&app, 80, 24).unwrap();
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Press any key to close"));
    }
}
