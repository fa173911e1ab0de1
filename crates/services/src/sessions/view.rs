use chrono::{DateTime, Duration, Utc};

use quiz_core::model::QuizMode;

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub index: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
    /// Option already recorded for this question, if any.
    pub selected: Option<usize>,
}

impl QuestionView<'_> {
    /// 1-based question number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Practice-mode payload shown right after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub chosen_index: usize,
    pub chosen_text: String,
    pub correct_index: usize,
    pub correct_text: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// One line of the results review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub number: usize,
    pub prompt: String,
    /// `None` when the session finished before this question was answered.
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Results of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub label: String,
    pub mode: QuizMode,
    pub score: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub items: Vec<ReviewItem>,
}

impl QuizSummary {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at).max(Duration::zero())
    }

    #[must_use]
    pub fn missed(&self) -> impl Iterator<Item = &ReviewItem> {
        self.items.iter().filter(|item| !item.is_correct)
    }
}
