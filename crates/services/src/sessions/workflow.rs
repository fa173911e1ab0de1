use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{QuizCatalog, QuizChoice, QuizMode};
use sources::QuestionSource;

use crate::error::SessionError;
use super::loader::QuizLoader;
use super::service::{AnswerOutcome, QuizSession, SessionState};

/// Starts quiz sessions from catalog choices and drives them with clock timestamps.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    loader: QuizLoader,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>, catalog: Arc<QuizCatalog>) -> Self {
        Self {
            clock,
            loader: QuizLoader::new(source, catalog),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuizCatalog {
        self.loader.catalog()
    }

    #[must_use]
    pub fn loader(&self) -> &QuizLoader {
        &self.loader
    }

    /// Load `choice` and start a freshly shuffled session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the choice is unknown, fetching fails, or the set is empty.
    pub async fn start(&self, mode: QuizMode, choice: QuizChoice) -> Result<QuizSession, SessionError> {
        let set = self.loader.load(choice).await?;
        let session = QuizSession::new(mode, set, self.clock.now())?;
        tracing::info!(
            label = %session.label(),
            %mode,
            questions = session.total(),
            "quiz session started"
        );
        Ok(session)
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::select_answer`].
    pub fn answer(&self, session: &mut QuizSession, option: usize) -> Result<AnswerOutcome, SessionError> {
        session.select_answer(option, self.clock.now())
    }

    /// Move past the current (answered) question.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::advance`].
    pub fn advance(&self, session: &mut QuizSession) -> Result<SessionState, SessionError> {
        session.advance(self.clock.now())
    }

    /// End the session now with the answers recorded so far.
    pub fn finish(&self, session: &mut QuizSession) -> usize {
        session.finish(self.clock.now())
    }

    /// Replace `session` with a new attempt at the same questions, reshuffled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` only if the session somehow held no questions.
    pub fn restart(&self, session: QuizSession) -> Result<QuizSession, SessionError> {
        let mode = session.mode();
        let restarted = QuizSession::new(mode, session.into_set(), self.clock.now())?;
        tracing::info!(label = %restarted.label(), %mode, "quiz session restarted");
        Ok(restarted)
    }
}
