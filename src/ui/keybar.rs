use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match state.screen() {
        Screen::Menu => vec![("Enter", "start"), ("q", "quit")],
        Screen::Question(_) => vec![
            ("↑/↓", "move"),
            ("Enter/a-i", "answer"),
            ("→", "next"),
            ("←", "back"),
            ("Home", "question 1"),
            ("Esc", "menu"),
        ],
        Screen::Results => vec![
            ("r", "restart"),
            ("m", "main menu"),
            ("←", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    if let Some(ref notice) = state.notice {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        ));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
