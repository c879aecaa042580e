use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_menu(f: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            quiz.title().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} questions", quiz.total_questions())),
    ];

    let answered = quiz.answered_questions();
    if quiz.is_complete() {
        lines.push(Line::from(Span::styled(
            "All questions answered",
            Style::default().fg(Color::Green),
        )));
    } else if answered > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} answered so far", answered),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Start",
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
