//! Keybinding help shown on top of the current view

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Sections of the help overlay: heading followed by (key, action) pairs
const KEYMAP: &[(&str, &[(&str, &str)])] = &[
    (
        "Monkey list",
        &[
            ("↑/k ↓/j", "Move selection"),
            ("Enter", "Open details"),
            ("Esc/q", "Quit"),
        ],
    ),
    (
        "Monkey details",
        &[
            ("1-5", "Give 1 to 5 stars"),
            ("0", "Clear rating"),
            ("Esc", "Back to list"),
            ("q", "Quit"),
        ],
    ),
];

const FOOTER: &str = "Esc, ? or q closes this help";
const KEY_COLUMN: usize = 10;
const OVERLAY_WIDTH: u16 = 44;

/// Builds the overlay text from the keymap
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (heading, bindings) in KEYMAP {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", key, width = KEY_COLUMN),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        FOOTER,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Centers a `width` x `height` box inside `area`, shrinking it to fit
fn overlay_area(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let lines = help_lines();
    // Two rows for the border
    let area = overlay_area(OVERLAY_WIDTH, lines.len() as u16 + 2, frame.area());

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_lines_cover_every_binding() {
        let bindings: usize = KEYMAP.iter().map(|(_, b)| b.len()).sum();
        // heading + bindings + blank per section, then the footer
        assert_eq!(help_lines().len(), KEYMAP.len() * 2 + bindings + 1);
    }

    #[test]
    fn test_overlay_area_is_centered() {
        let area = overlay_area(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_overlay_area_shrinks_to_small_terminal() {
        let area = overlay_area(44, 16, Rect::new(0, 0, 30, 8));
        assert_eq!(area.width, 30);
        assert_eq!(area.height, 8);
    }

    #[test]
    fn test_render_shows_rating_keys_and_footer() {
        let content = rendered(80, 24);

        assert!(content.contains("Keys"));
        assert!(content.contains("Monkey details"));
        assert!(content.contains("Clear rating"));
        assert!(content.contains("Esc, ? or q closes this help"));
    }
}
