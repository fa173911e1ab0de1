//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizChoice;
use sources::SourceError;

/// Errors emitted by quiz loading and session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz set {label} has no questions")]
    Empty { label: String },
    #[error("session already finished")]
    Finished,
    #[error("current question has not been answered yet")]
    AwaitingAnswer,
    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("no quiz set for choice {choice}")]
    UnknownSet { choice: QuizChoice },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl SessionError {
    /// True when loading failed because a source could not deliver, rather than because
    /// the data was valid but empty.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, SessionError::Source(_))
    }
}
