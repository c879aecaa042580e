use thiserror::Error;

/// Errors raised while building or querying a [`crate::model::Quiz`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A question record is missing a field or carries an impossible value.
    #[error("malformed question record: {0}")]
    MalformedRecord(String),

    /// The document does not have the expected top-level structure.
    #[error("invalid question source: {0}")]
    InvalidSource(String),

    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Contract violations reported by [`crate::nav::NavigationStack`].
///
/// All of these leave the stack exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("a navigation stack cannot be replaced with an empty list")]
    EmptyStackRejected,

    #[error("screen is already on the navigation stack")]
    DuplicateScreen,

    #[error("screen is not on the navigation stack")]
    ScreenNotFound,

    #[error("navigation stack is empty")]
    EmptyStack,

    #[error("a transition is already in progress")]
    TransitionInProgress,
}

/// Anything a user intent can run into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Nav(#[from] NavError),
}
