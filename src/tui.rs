use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;

use crate::error::AppError;
use crate::state::{AppState, Screen};

/// Poll interval while a fade is playing (about 60 frames per second).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_tui(mut state: AppState) -> anyhow::Result<()> {
    enable_raw_mode().context("Cannot enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Cannot enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Cannot create terminal")?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    state.nav.teardown();
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        state.tick(now - last_frame);
        last_frame = now;

        terminal
            .draw(|f| crate::ui::draw(f, state))
            .context("Draw error")?;

        if state.should_quit {
            break;
        }

        let timeout = if state.nav.is_transitioning() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        if event::poll(timeout).context("Poll error")? {
            if let Event::Key(key) = event::read().context("Read error")? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state);
                }
            }
        }
    }

    Ok(())
}

/// Routes a key press to the screen on top of the stack. Rejected intents
/// are logged and surfaced in the key bar; they never end the session.
pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    state.notice = None;

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        state.quit();
        return;
    }

    let result = match state.screen() {
        Screen::Menu => handle_menu_key(key, state),
        Screen::Question(_) => handle_question_key(key, state),
        Screen::Results => handle_results_key(key, state),
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, key = ?key.code, "intent rejected");
        state.notice = Some(e.to_string());
    }
}

fn handle_menu_key(key: KeyEvent, state: &mut AppState) -> Result<(), AppError> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => state.start(),
        KeyCode::Char('q') | KeyCode::Esc => {
            state.quit();
            Ok(())
        }
        _ => Ok(()),
    }
}

fn handle_question_key(key: KeyEvent, state: &mut AppState) -> Result<(), AppError> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor(-1);
            Ok(())
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor(1);
            Ok(())
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.select_at_cursor(),
        KeyCode::Right | KeyCode::Char('n') => state.next(),
        KeyCode::Left | KeyCode::Backspace => state.back(),
        KeyCode::Home => state.first_question(),
        KeyCode::Esc => state.leave_to_menu(),
        KeyCode::Char(c @ 'a'..='i') => state.select_response(c as usize - 'a' as usize),
        _ => Ok(()),
    }
}

fn handle_results_key(key: KeyEvent, state: &mut AppState) -> Result<(), AppError> {
    match key.code {
        KeyCode::Char('r') => state.restart(),
        KeyCode::Char('m') => state.main_menu(),
        KeyCode::Left | KeyCode::Backspace => state.back(),
        KeyCode::Char('q') => {
            state.quit();
            Ok(())
        }
        _ => Ok(()),
    }
}
