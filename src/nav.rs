//! A navigation stack of screens that changes the visible screen with a
//! cross-fade instead of a slide.
//!
//! The stack itself is mutated synchronously as soon as an operation is
//! accepted, so every error is reported to the caller immediately and a
//! failed call never changes anything. Only the visual fade lags behind:
//! fades are kept in a FIFO and played one after another by [`advance`].
//!
//! [`advance`]: NavigationStack::advance

use std::collections::VecDeque;
use std::fmt::Debug;
use std::time::Duration;

use crate::error::NavError;

pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

/// What happens to a navigation request that arrives while a fade is still
/// playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Apply the change and play its fade after the ones already pending.
    #[default]
    Queue,
    /// Refuse the request with [`NavError::TransitionInProgress`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    pub fade: Duration,
    pub policy: TransitionPolicy,
    /// When false every operation behaves as if called with `animated = false`.
    pub animated: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fade: DEFAULT_FADE,
            policy: TransitionPolicy::Queue,
            animated: true,
        }
    }
}

#[derive(Debug, Clone)]
struct Transition<S> {
    from: S,
    to: S,
    duration: Duration,
    elapsed: Duration,
}

impl<S> Transition<S> {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// What should be on screen right now.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, S> {
    Static(&'a S),
    /// `from` fades out while `to` fades in; `progress` runs from 0 to 1.
    Fade {
        from: &'a S,
        to: &'a S,
        progress: f32,
    },
}

impl<'a, S> Presentation<'a, S> {
    /// The screen that is more opaque at this instant, with its opacity.
    pub fn dominant(&self) -> (&'a S, f32) {
        match *self {
            Presentation::Static(screen) => (screen, 1.0),
            Presentation::Fade { from, to, progress } => {
                if progress < 0.5 {
                    (from, 1.0 - progress)
                } else {
                    (to, progress)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationStack<S> {
    stack: Vec<S>,
    displayed: Option<S>,
    pending: VecDeque<Transition<S>>,
    config: NavConfig,
}

impl<S: Clone + PartialEq + Debug> NavigationStack<S> {
    pub fn new(config: NavConfig) -> Self {
        Self {
            stack: Vec::new(),
            displayed: None,
            pending: VecDeque::new(),
            config,
        }
    }

    pub fn with_root(root: S, config: NavConfig) -> Self {
        let mut nav = Self::new(config);
        nav.displayed = Some(root.clone());
        nav.stack.push(root);
        nav
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Bottom to top.
    pub fn screens(&self) -> &[S] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn contains(&self, screen: &S) -> bool {
        self.stack.contains(screen)
    }

    pub fn top(&self) -> Result<&S, NavError> {
        self.stack.last().ok_or(NavError::EmptyStack)
    }

    pub fn is_transitioning(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of fades still to play, including the one in flight.
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    /// Replaces the whole stack. Used to set the root screen and to jump
    /// straight to an arbitrary point in history.
    pub fn set_stack(&mut self, screens: Vec<S>, animated: bool) -> Result<(), NavError> {
        self.ensure_idle()?;
        if screens.is_empty() {
            return Err(NavError::EmptyStackRejected);
        }
        if has_duplicates(&screens) {
            return Err(NavError::DuplicateScreen);
        }

        tracing::debug!(screens = ?screens, animated, "set stack");
        self.stack = screens;
        self.schedule(animated);
        Ok(())
    }

    pub fn push(&mut self, screen: S, animated: bool) -> Result<(), NavError> {
        self.ensure_idle()?;
        if self.stack.contains(&screen) {
            return Err(NavError::DuplicateScreen);
        }

        tracing::debug!(screen = ?screen, depth = self.stack.len() + 1, animated, "push");
        self.stack.push(screen);
        self.schedule(animated);
        Ok(())
    }

    /// Pops every screen above `screen` and hands them back in stack order.
    /// Popping to the current top is a no-op returning nothing.
    pub fn pop_to(&mut self, screen: &S, animated: bool) -> Result<Vec<S>, NavError> {
        self.ensure_idle()?;
        let idx = self
            .stack
            .iter()
            .position(|s| s == screen)
            .ok_or(NavError::ScreenNotFound)?;

        let discarded = self.stack.split_off(idx + 1);
        if !discarded.is_empty() {
            tracing::debug!(screen = ?screen, discarded = discarded.len(), animated, "pop to");
            self.schedule(animated);
        }
        Ok(discarded)
    }

    /// Pops the top screen, revealing the one beneath it.
    pub fn pop(&mut self, animated: bool) -> Result<S, NavError> {
        let below = match self.stack.len() {
            0 => return Err(NavError::EmptyStack),
            1 => return Err(NavError::ScreenNotFound),
            n => self.stack[n - 2].clone(),
        };
        let mut discarded = self.pop_to(&below, animated)?;
        discarded.pop().ok_or(NavError::ScreenNotFound)
    }

    /// Moves the in-flight fade forward by `dt`. Finished fades are retired
    /// and the next queued one starts with whatever time is left over.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;
        while let Some(head) = self.pending.front_mut() {
            let left = head.duration.saturating_sub(head.elapsed);
            if remaining < left {
                head.elapsed += remaining;
                return;
            }
            remaining -= left;
            let to = head.to.clone();
            self.pending.pop_front();
            tracing::trace!(screen = ?to, "transition finished");
            self.displayed = Some(to);
        }
    }

    pub fn presentation(&self) -> Option<Presentation<'_, S>> {
        if let Some(t) = self.pending.front() {
            return Some(Presentation::Fade {
                from: &t.from,
                to: &t.to,
                progress: t.progress(),
            });
        }
        self.displayed.as_ref().map(Presentation::Static)
    }

    /// Drops the in-flight fade and everything queued behind it. The view
    /// snaps to the current top.
    pub fn teardown(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        self.displayed = self.stack.last().cloned();
        if dropped > 0 {
            tracing::debug!(dropped, "pending transitions cancelled");
        }
    }

    fn ensure_idle(&self) -> Result<(), NavError> {
        if self.config.policy == TransitionPolicy::Reject && !self.pending.is_empty() {
            return Err(NavError::TransitionInProgress);
        }
        Ok(())
    }

    /// Where the view will settle once every pending fade has played.
    fn destination(&self) -> Option<&S> {
        self.pending
            .back()
            .map(|t| &t.to)
            .or(self.displayed.as_ref())
    }

    fn schedule(&mut self, animated: bool) {
        let Some(to) = self.stack.last().cloned() else {
            return;
        };
        let Some(from) = self.destination().cloned() else {
            self.displayed = Some(to);
            return;
        };
        if from == to {
            return;
        }

        let animate = animated && self.config.animated;
        if !animate && self.pending.is_empty() {
            self.displayed = Some(to);
            return;
        }

        // Instant changes still wait their turn behind running fades.
        let duration = if animate {
            self.config.fade
        } else {
            Duration::ZERO
        };
        self.pending.push_back(Transition {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        });
    }
}

fn has_duplicates<S: PartialEq>(screens: &[S]) -> bool {
    screens
        .iter()
        .enumerate()
        .any(|(i, s)| screens[..i].contains(s))
}
