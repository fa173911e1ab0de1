use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// `correct_index` always points at one of `options`, and there are at least two options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl Question {
    /// Minimum number of options a playable question carries.
    pub const MIN_OPTIONS: usize = 2;

    /// Build a question, checking the option/answer invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank,
    /// `QuestionError::TooFewOptions` with fewer than two options, and
    /// `QuestionError::CorrectIndexOutOfRange` if `correct_index` is not a valid option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Rebuild this question with its options in a new order.
    ///
    /// `order[new] = old` maps every new position to the option it came from.
    /// Returns `None` if `order` is not a permutation of the option positions.
    #[must_use]
    pub fn reordered(&self, order: &[usize]) -> Option<Self> {
        if order.len() != self.options.len() {
            return None;
        }
        let mut seen = vec![false; order.len()];
        for &old in order {
            if old >= seen.len() || std::mem::replace(&mut seen[old], true) {
                return None;
            }
        }

        let options = order.iter().map(|&old| self.options[old].clone()).collect();
        let correct_index = order.iter().position(|&old| old == self.correct_index)?;

        Some(Self {
            prompt: self.prompt.clone(),
            options,
            correct_index,
            explanation: self.explanation.clone(),
        })
    }
}

//
// ─── WIRE RECORD ───────────────────────────────────────────────────────────────
//

/// Question record as served by question sources:
/// `{ "question", "options", "answer", "explanation" }`.
///
/// Every field is required; a record missing one fails deserialization.
/// Unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
    pub explanation: String,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if the record violates the question invariants.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(self.question, self.options, self.answer, self.explanation)
    }
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            question: question.prompt.clone(),
            options: question.options.clone(),
            answer: question.correct_index,
            explanation: question.explanation.clone(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct answer index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
