use std::time::Duration;

use crate::error::AppError;
use crate::model::{Question, Quiz};
use crate::nav::{NavConfig, NavigationStack, Presentation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Question(usize),
    Results,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub quiz: Quiz,
    pub nav: NavigationStack<Screen>,
    /// Highlighted response on the current question screen.
    pub cursor: usize,
    /// Last rejected intent, shown in the key bar until the next key press.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(quiz: Quiz, config: NavConfig) -> Self {
        Self {
            quiz,
            nav: NavigationStack::with_root(Screen::Menu, config),
            cursor: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// The top of the navigation stack; input is always routed here even
    /// while a fade towards it is still playing.
    pub fn screen(&self) -> Screen {
        self.nav.top().copied().unwrap_or(Screen::Menu)
    }

    pub fn presentation(&self) -> Option<Presentation<'_, Screen>> {
        self.nav.presentation()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.screen() {
            Screen::Question(idx) => self.quiz.question_at(idx).ok(),
            _ => None,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.nav.advance(dt);
    }

    pub fn start(&mut self) -> Result<(), AppError> {
        if self.screen() != Screen::Menu {
            return Ok(());
        }
        self.nav.push(Screen::Question(0), true)?;
        self.sync_cursor();
        Ok(())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let Some(q) = self.current_question() else {
            return;
        };
        let last = q.responses().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn select_response(&mut self, response: usize) -> Result<(), AppError> {
        let Screen::Question(idx) = self.screen() else {
            return Ok(());
        };
        self.quiz
            .question_at_mut(idx)?
            .set_selected_response(response)?;
        self.cursor = response;
        Ok(())
    }

    pub fn select_at_cursor(&mut self) -> Result<(), AppError> {
        self.select_response(self.cursor)
    }

    /// Next question, or the results after the last one.
    pub fn next(&mut self) -> Result<(), AppError> {
        let Screen::Question(idx) = self.screen() else {
            return Ok(());
        };
        let target = if idx + 1 < self.quiz.total_questions() {
            Screen::Question(idx + 1)
        } else {
            Screen::Results
        };
        self.nav.push(target, true)?;
        self.sync_cursor();
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), AppError> {
        self.nav.pop(true)?;
        self.sync_cursor();
        Ok(())
    }

    /// Returns to question 1 keeping the answers given so far.
    pub fn first_question(&mut self) -> Result<(), AppError> {
        self.nav
            .set_stack(vec![Screen::Menu, Screen::Question(0)], true)?;
        self.sync_cursor();
        Ok(())
    }

    /// Leaves the quiz for the main menu without clearing answers.
    pub fn leave_to_menu(&mut self) -> Result<(), AppError> {
        self.nav.pop_to(&Screen::Menu, true)?;
        self.cursor = 0;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), AppError> {
        self.nav
            .set_stack(vec![Screen::Menu, Screen::Question(0)], true)?;
        self.quiz.reset_quiz();
        self.cursor = 0;
        Ok(())
    }

    pub fn main_menu(&mut self) -> Result<(), AppError> {
        self.nav.set_stack(vec![Screen::Menu], true)?;
        self.quiz.reset_quiz();
        self.cursor = 0;
        Ok(())
    }

    pub fn quit(&mut self) {
        self.nav.teardown();
        self.should_quit = true;
    }

    fn sync_cursor(&mut self) {
        self.cursor = self
            .current_question()
            .and_then(|q| q.selected_response())
            .unwrap_or(0);
    }
}
