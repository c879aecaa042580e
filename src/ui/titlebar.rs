use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;

    let progress_text = if quiz.is_complete() {
        format!(" ✓ all {} answered ", quiz.total_questions())
    } else {
        format!(
            " {}/{} answered ",
            quiz.answered_questions(),
            quiz.total_questions()
        )
    };
    let progress_span = Span::styled(
        progress_text.clone(),
        Style::default().fg(Color::Rgb(200, 200, 120)),
    );

    let title_text = format!("[ {} ]", quiz.title());
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title over the full width, progress flush right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad =
        available.saturating_sub(center_pad + title_len + progress_text.chars().count());

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        progress_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
