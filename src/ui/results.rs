use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;
    let score = quiz.percentage_score();
    let score_color = if score >= 50.0 {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Results",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {:.1}%", score),
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Correct: {}    Answered: {}    Total questions: {}",
            quiz.correctly_answered_questions(),
            quiz.answered_questions(),
            quiz.total_questions()
        )),
        Line::from(""),
    ];

    for (i, q) in quiz.questions().iter().enumerate() {
        let (icon, color) = if !q.is_answered() {
            ("·", Color::DarkGray)
        } else if q.is_correct() {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::raw(format!("{}. {}", i + 1, q.text())),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[r] Restart    [m] Main menu    [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
