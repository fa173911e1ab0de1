use dioxus::prelude::*;
use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    FetchFailed,
    InvalidSet,
    EmptySet,
    UnknownSet,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::FetchFailed => "Could not load the questions. Check your connection and retry.",
            ViewError::InvalidSet => "This quiz set is damaged and cannot be played.",
            ViewError::EmptySet => "This quiz set has no questions yet.",
            ViewError::UnknownSet => "That quiz set does not exist.",
        }
    }

    /// Whether retrying the same request could succeed.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, ViewError::Unknown | ViewError::FetchFailed)
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Source(source) if source.is_transport() => ViewError::FetchFailed,
            SessionError::Source(_) => ViewError::InvalidSet,
            SessionError::Empty { .. } => ViewError::EmptySet,
            SessionError::UnknownSet { .. } => ViewError::UnknownSet,
            _ => ViewError::Unknown,
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        ViewError::from(&err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
