//! Monkey detail screen rendering
//!
//! Shows every field of one monkey along with its star rating. Ratings are
//! edited with the number keys while this screen is open.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{Monkey, MonkeySource};

use super::{format_population, stars};

/// Renders the detail view for the monkey selected in the app
pub fn render<S: MonkeySource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let Some(monkey) = app.detail_monkey() else {
        let missing = Paragraph::new("Monkey not found").style(Style::default().fg(Color::Red));
        frame.render_widget(missing, chunks[0]);
        return;
    };

    let rating = app.ratings().get_rating(monkey);
    let block = Block::default()
        .title(format!(" {} ", monkey.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(build_detail_lines(monkey, rating))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(Line::from(Span::styled(
        "0-5 rate  Esc back  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, chunks[1]);
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn build_detail_lines(monkey: &Monkey, rating: u8) -> Vec<Line<'static>> {
    let rating_text = if rating == 0 {
        format!("{}  (unrated)", stars(0))
    } else {
        stars(rating)
    };

    vec![
        Line::from(vec![
            Span::styled("Rating      ", Style::default().fg(Color::Gray)),
            Span::styled(
                rating_text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        field_line("Location", monkey.location.clone()),
        field_line("Population", format_population(monkey.population)),
        field_line(
            "Coordinates",
            format!("{:.4}, {:.4}", monkey.latitude, monkey.longitude),
        ),
        field_line("Image", monkey.image.clone()),
        Line::from(""),
        Line::from(monkey.details.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lines_show_fields() {
        let monkey = Monkey {
            location: "Borneo".to_string(),
            details: "Known for its large nose.".to_string(),
            population: 7000,
            ..Monkey::named("Proboscis Monkey")
        };

        let text: String = build_detail_lines(&monkey, 3)
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();

        assert!(text.contains("Borneo"));
        assert!(text.contains("7,000"));
        assert!(text.contains("large nose"));
        assert!(text.contains("★★★☆☆"));
        assert!(!text.contains("unrated"));
    }

    #[test]
    fn test_detail_lines_mark_unrated() {
        let text: String = build_detail_lines(&Monkey::named("Baboon"), 0)
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();

        assert!(text.contains("unrated"));
    }
}
