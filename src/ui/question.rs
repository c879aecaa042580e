use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState, idx: usize) {
    let Ok(question) = state.quiz.question_at(idx) else {
        return;
    };
    // A screen that is fading out is no longer interactive: no cursor.
    let interactive = state.screen() == Screen::Question(idx);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", idx + 1, state.quiz.total_questions()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.text().to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    for (i, response) in question.responses().iter().enumerate() {
        let selected = question.selected_response() == Some(i);
        let marker = if selected { "(●)" } else { "( )" };
        let label = char::from_u32('a' as u32 + i as u32).unwrap_or('?');

        let mut style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if interactive && i == state.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(Span::styled(
            format!("  {} {}. {}", marker, label, response),
            style,
        )));
    }

    lines.push(Line::from(""));
    let hint = if idx + 1 < state.quiz.total_questions() {
        "[→] Next question"
    } else {
        "[→] See results"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
