//! Monkey list screen rendering
//!
//! Renders the main list view showing every cached monkey with its location,
//! population and the user's star rating.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::MonkeySource;

use super::{format_population, stars};

/// Renders the monkey list screen
///
/// The currently selected monkey is highlighted with a cursor indicator.
pub fn render_monkey_list<S: MonkeySource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Monkey list
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_help(frame, chunks[2]);
}

fn render_header<S: MonkeySource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let rated = app.ratings().iter().filter(|(_, r)| *r > 0).count();
    let separator = "─".repeat((area.width as usize).saturating_sub(2));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "MONKEYFINDER",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} monkeys, {} rated", app.monkeys().len(), rated),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list<S: MonkeySource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Monkeys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let monkeys = app.monkeys();
    if monkeys.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No monkeys found",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selection on screen
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible > 0 && app.selected_index >= visible {
        app.selected_index + 1 - visible
    } else {
        0
    };

    let lines: Vec<Line> = monkeys
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(index, monkey)| {
            let is_selected = index == app.selected_index;
            let cursor = if is_selected { "\u{25B8} " } else { "  " }; // ▸ or space

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<26}", monkey.name), name_style),
                Span::styled(
                    format!("{:<28}", monkey.location),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>12} ", format_population(monkey.population)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    stars(app.ratings().get_rating(monkey)),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "↑/↓ navigate  Enter details  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FetchError, Monkey};
    use async_trait::async_trait;
    use ratatui::{backend::TestBackend, Terminal};

    struct StaticSource(Vec<Monkey>);

    #[async_trait]
    impl MonkeySource for StaticSource {
        async fn fetch_monkeys(&self) -> Result<Vec<Monkey>, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn rendered<S: MonkeySource>(app: &App<S>) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_monkey_list(frame, app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn test_renders_monkeys() {
        let mut app = App::with_source(StaticSource(vec![
            Monkey {
                location: "Africa & Asia".to_string(),
                population: 10000,
                ..Monkey::named("Baboon")
            },
            Monkey::named("Capuchin"),
        ]));
        app.load_monkeys().await;

        let content = rendered(&app);

        assert!(content.contains("MONKEYFINDER"));
        assert!(content.contains("Baboon"));
        assert!(content.contains("Capuchin"));
        assert!(content.contains("10,000"));
        assert!(content.contains("2 monkeys"));
    }

    #[tokio::test]
    async fn test_renders_empty_message() {
        let mut app = App::with_source(StaticSource(Vec::new()));
        app.load_monkeys().await;

        let content = rendered(&app);

        assert!(content.contains("No monkeys found"));
    }
}
