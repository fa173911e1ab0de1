use async_trait::async_trait;
use quiz_core::model::{Question, QuestionError};
use thiserror::Error;

/// Errors surfaced by question sources.
///
/// Transport problems (`NotFound`, `HttpStatus`, `Connection`, `Io`) are kept apart from
/// content problems (`Malformed`, `InvalidRecord`) so callers can tell a dead link from a bad file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question set not found: {path}")]
    NotFound { path: String },

    #[error("question set {path} returned status {status}")]
    HttpStatus { path: String, status: u16 },

    #[error("could not reach question set {path}: {message}")]
    Connection { path: String, message: String },

    #[error("could not read question set {path}: {message}")]
    Io { path: String, message: String },

    #[error("question set {path} is not a valid question list: {message}")]
    Malformed { path: String, message: String },

    #[error("question {index} in {path} is invalid: {source}")]
    InvalidRecord {
        path: String,
        index: usize,
        #[source]
        source: QuestionError,
    },
}

impl SourceError {
    /// Path of the set that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            SourceError::NotFound { path }
            | SourceError::HttpStatus { path, .. }
            | SourceError::Connection { path, .. }
            | SourceError::Io { path, .. }
            | SourceError::Malformed { path, .. }
            | SourceError::InvalidRecord { path, .. } => path,
        }
    }

    /// True when the set could not be fetched at all, as opposed to fetched but rejected.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SourceError::NotFound { .. }
                | SourceError::HttpStatus { .. }
                | SourceError::Connection { .. }
                | SourceError::Io { .. }
        )
    }
}

/// Supplies the ordered questions stored under a set path.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch and validate every question at `path`, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the set cannot be fetched or any record is malformed.
    async fn fetch_set(&self, path: &str) -> Result<Vec<Question>, SourceError>;
}
