use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionDraft};

use crate::source::{QuestionSource, SourceError};

type Entry = Result<Vec<Question>, SourceError>;

/// In-memory question source for tests and previews.
///
/// Paths can hold a question list or a canned failure; unknown paths are `NotFound`.
/// Every fetch is recorded so callers can assert on what was requested.
#[derive(Clone, Default)]
pub struct InMemorySource {
    sets: Arc<Mutex<HashMap<String, Entry>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_set(self, path: impl Into<String>, questions: Vec<Question>) -> Self {
        self.insert(path, Ok(questions));
        self
    }

    #[must_use]
    pub fn with_failure(self, path: impl Into<String>, error: SourceError) -> Self {
        self.insert(path, Err(error));
        self
    }

    /// Store raw wire records, validating them the way a real source would on fetch.
    #[must_use]
    pub fn with_drafts(self, path: impl Into<String>, drafts: Vec<QuestionDraft>) -> Self {
        let path = path.into();
        let entry = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft.validate().map_err(|source| SourceError::InvalidRecord {
                    path: path.clone(),
                    index,
                    source,
                })
            })
            .collect();
        self.insert(path, entry);
        self
    }

    pub fn insert(&self, path: impl Into<String>, entry: Entry) {
        if let Ok(mut guard) = self.sets.lock() {
            guard.insert(path.into(), entry);
        }
    }

    /// Paths fetched so far, in call order.
    #[must_use]
    pub fn fetched(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn fetch_set(&self, path: &str) -> Result<Vec<Question>, SourceError> {
        let poisoned = |e: String| SourceError::Connection {
            path: path.to_string(),
            message: e,
        };

        self.fetched
            .lock()
            .map_err(|e| poisoned(e.to_string()))?
            .push(path.to_string());

        let guard = self.sets.lock().map_err(|e| poisoned(e.to_string()))?;
        guard.get(path).cloned().unwrap_or_else(|| {
            Err(SourceError::NotFound {
                path: path.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str) -> Question {
        Question::new(prompt, vec!["A".into(), "B".into()], 1, "").unwrap()
    }

    #[tokio::test]
    async fn serves_sets_and_records_fetches() {
        let source = InMemorySource::new().with_set("/one.json", vec![question("Q1")]);

        let questions = source.fetch_set("/one.json").await.unwrap();
        assert_eq!(questions[0].prompt(), "Q1");

        let err = source.fetch_set("/missing.json").await.unwrap_err();
        assert_eq!(
            err,
            SourceError::NotFound {
                path: "/missing.json".into()
            }
        );

        assert_eq!(source.fetched(), ["/one.json", "/missing.json"]);
    }

    #[tokio::test]
    async fn drafts_are_validated_on_fetch() {
        let bad = QuestionDraft {
            question: "Q".into(),
            options: vec!["only".into()],
            answer: 0,
            explanation: String::new(),
        };
        let source = InMemorySource::new().with_drafts("/bad.json", vec![bad]);

        let err = source.fetch_set("/bad.json").await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidRecord { index: 0, .. }));
    }
}
