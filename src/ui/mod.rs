pub mod fade;
pub mod keybar;
pub mod layout;
pub mod menu;
pub mod question;
pub mod results;
pub mod titlebar;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::state::{AppState, Screen};

/// Draws the chrome, then whichever screen dominates the current fade,
/// dimmed to its opacity. Title and key bars never fade.
pub fn draw(f: &mut Frame, state: &AppState) {
    let layout = layout::compute_layout(f.area());

    titlebar::draw_titlebar(f, layout.titlebar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    let Some(presentation) = state.presentation() else {
        return;
    };
    let (screen, opacity) = presentation.dominant();
    draw_screen(f, layout.main, state, *screen);
    fade::apply(f.buffer_mut(), layout.main, opacity);
}

fn draw_screen(f: &mut Frame, area: Rect, state: &AppState, screen: Screen) {
    match screen {
        Screen::Menu => menu::draw_menu(f, area, state),
        Screen::Question(idx) => question::draw_question(f, area, state, idx),
        Screen::Results => results::draw_results(f, area, state),
    }
}
