use std::sync::Arc;

use futures::future::try_join_all;

use quiz_core::model::{QuizCatalog, QuizChoice, QuizSet, SetSource};
use sources::QuestionSource;

use crate::error::SessionError;

/// Resolves quiz choices against the catalog and fetches their questions.
#[derive(Clone)]
pub struct QuizLoader {
    source: Arc<dyn QuestionSource>,
    catalog: Arc<QuizCatalog>,
}

impl QuizLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, catalog: Arc<QuizCatalog>) -> Self {
        Self { source, catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    /// Load the questions behind `choice`, unshuffled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownSet` for a choice outside the catalog,
    /// `SessionError::Source` when fetching fails and `SessionError::Empty` when the
    /// fetched data is valid but holds no questions.
    pub async fn load(&self, choice: QuizChoice) -> Result<QuizSet, SessionError> {
        match choice {
            QuizChoice::Set(index) => self.load_set(index).await,
            QuizChoice::Aggregate => self.load_aggregate().await,
        }
    }

    /// Load one catalog set by its 0-based index.
    ///
    /// # Errors
    ///
    /// See [`QuizLoader::load`].
    pub async fn load_set(&self, index: usize) -> Result<QuizSet, SessionError> {
        let set = self
            .catalog
            .get(index)
            .ok_or(SessionError::UnknownSet {
                choice: QuizChoice::Set(index),
            })?;

        let loaded = fetch(self.source.as_ref(), set).await?;
        non_empty(loaded)
    }

    /// Fetch every aggregate set concurrently and concatenate them in catalog order.
    ///
    /// Completion order does not matter. One failed fetch fails the whole aggregate;
    /// there is no partial quiz.
    ///
    /// # Errors
    ///
    /// See [`QuizLoader::load`].
    pub async fn load_aggregate(&self) -> Result<QuizSet, SessionError> {
        let source = self.source.as_ref();
        let sets = self.catalog.aggregate_sources();
        tracing::info!(sets = sets.len(), "loading aggregate quiz");

        let loaded = try_join_all(sets.iter().map(|set| fetch(source, set)))
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, "aggregate quiz failed; discarding partial results");
            })?;

        non_empty(QuizSet::concat(self.catalog.aggregate_label(), loaded))
    }
}

async fn fetch(source: &dyn QuestionSource, set: &SetSource) -> Result<QuizSet, SessionError> {
    match source.fetch_set(&set.path).await {
        Ok(questions) => {
            tracing::debug!(label = %set.label, count = questions.len(), "question set loaded");
            Ok(QuizSet::new(set.label.clone(), questions))
        }
        Err(err) => {
            tracing::warn!(label = %set.label, error = %err, "question set failed to load");
            Err(err.into())
        }
    }
}

fn non_empty(set: QuizSet) -> Result<QuizSet, SessionError> {
    if set.is_empty() {
        return Err(SessionError::Empty {
            label: set.label().to_string(),
        });
    }
    Ok(set)
}
