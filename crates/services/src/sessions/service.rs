use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{Question, QuizMode, QuizSet};

use crate::error::SessionError;
use super::progress::SessionProgress;
use super::shuffle::shuffle_questions;
use super::view::{AnswerFeedback, QuestionView, QuizSummary, ReviewItem};

/// Chosen option per question index, in the session's shuffled order.
pub type Answers = BTreeMap<usize, usize>;

//
// ─── STATES AND OUTCOMES ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Answering { index: usize },
    Finished { score: usize },
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Practice mode: the session stays on this question until `advance`.
    Feedback(AnswerFeedback),
    /// Test mode: moved on to the next question.
    Advanced { index: usize },
    /// Test mode: that was the last question.
    Finished { score: usize },
}

/// Number of questions whose recorded answer matches the correct option.
///
/// Answers for indexes past the end of `questions` are ignored.
#[must_use]
pub fn score(questions: &[Question], answers: &Answers) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|&chosen| question.is_correct(chosen))
        })
        .count()
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a quiz.
///
/// Questions and their options are shuffled once, at construction, and never again; answer
/// indexes always refer to that frozen order. A restart builds a new session instead of
/// resetting this one.
pub struct QuizSession {
    label: String,
    mode: QuizMode,
    questions: Vec<Question>,
    current: usize,
    answers: Answers,
    score: Option<usize>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over `set`, shuffled with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the set has no questions.
    pub fn new(mode: QuizMode, set: QuizSet, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        Self::with_rng(mode, set, started_at, &mut rand::rng())
    }

    /// Start a session shuffled with the given RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the set has no questions.
    pub fn with_rng<R: Rng + ?Sized>(
        mode: QuizMode,
        set: QuizSet,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if set.is_empty() {
            return Err(SessionError::Empty {
                label: set.label().to_string(),
            });
        }

        let label = set.label().to_string();
        let questions = shuffle_questions(set.into_questions(), rng);

        Ok(Self {
            label,
            mode,
            questions,
            current: 0,
            answers: Answers::new(),
            score: None,
            started_at,
            finished_at: None,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// The frozen, shuffled questions.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.score.is_some()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.score {
            Some(score) => SessionState::Finished { score },
            None => SessionState::Answering {
                index: self.current,
            },
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let position = if self.is_finished() {
            self.total()
        } else {
            self.current + 1
        };
        SessionProgress {
            position,
            total: self.total(),
            answered: self.answers.len(),
            is_finished: self.is_finished(),
        }
    }

    /// The question awaiting an answer, or `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView<'_>> {
        if self.is_finished() {
            return None;
        }
        let question = self.questions.get(self.current)?;
        Some(QuestionView {
            index: self.current,
            total: self.total(),
            prompt: question.prompt(),
            options: question.options(),
            selected: self.answers.get(&self.current).copied(),
        })
    }

    /// Practice-mode feedback for the current question, once it has been answered.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if self.mode != QuizMode::Practice || self.is_finished() {
            return None;
        }
        let chosen = *self.answers.get(&self.current)?;
        self.feedback_for(self.current, chosen)
    }

    /// Record `option` for the current question.
    ///
    /// A repeated answer to the same question overwrites the previous one. In test mode the
    /// session moves on immediately; in practice mode it waits for [`QuizSession::advance`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the session ended and
    /// `SessionError::OptionOutOfRange` for an option the question does not have.
    pub fn select_answer(
        &mut self,
        option: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let index = self.answering_index()?;
        let len = self.questions[index].options().len();
        if option >= len {
            return Err(SessionError::OptionOutOfRange { index: option, len });
        }

        self.answers.insert(index, option);

        if self.mode.auto_advances() {
            return Ok(match self.step(answered_at) {
                SessionState::Answering { index } => AnswerOutcome::Advanced { index },
                SessionState::Finished { score } => AnswerOutcome::Finished { score },
            });
        }

        self.feedback_for(index, option)
            .map(AnswerOutcome::Feedback)
            .ok_or(SessionError::OptionOutOfRange { index: option, len })
    }

    /// Move past an answered question; finishes the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the session ended and
    /// `SessionError::AwaitingAnswer` if the current question has no answer yet.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<SessionState, SessionError> {
        let index = self.answering_index()?;
        if !self.answers.contains_key(&index) {
            return Err(SessionError::AwaitingAnswer);
        }
        Ok(self.step(at))
    }

    /// Finish using the answers recorded so far. Unanswered questions score zero.
    ///
    /// Once finished, further calls return the stored score unchanged.
    pub fn finish(&mut self, at: DateTime<Utc>) -> usize {
        let answers = self.answers.clone();
        self.finish_with(answers, at)
    }

    /// Finish by scoring an explicit answers snapshot, which becomes the session's answers.
    ///
    /// Once finished, further calls return the stored score unchanged.
    pub fn finish_with(&mut self, answers: Answers, at: DateTime<Utc>) -> usize {
        if let Some(score) = self.score {
            return score;
        }

        let score = score(&self.questions, &answers);
        self.answers = answers;
        self.score = Some(score);
        self.finished_at = Some(at);
        tracing::debug!(label = %self.label, score, total = self.total(), "quiz session finished");
        score
    }

    /// Results with a per-question review, available once finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        let score = self.score?;
        let finished_at = self.finished_at?;
        let items = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = self.answers.get(&index).copied();
                ReviewItem {
                    number: index + 1,
                    prompt: question.prompt().to_string(),
                    chosen: chosen.and_then(|c| question.option(c)).map(str::to_string),
                    correct: question.correct_option().to_string(),
                    is_correct: chosen.is_some_and(|c| question.is_correct(c)),
                    explanation: question.explanation().to_string(),
                }
            })
            .collect();

        Some(QuizSummary {
            label: self.label.clone(),
            mode: self.mode,
            score,
            total: self.total(),
            started_at: self.started_at,
            finished_at,
            items,
        })
    }

    /// Give back the questions, e.g. to reshuffle them into a fresh session.
    #[must_use]
    pub fn into_set(self) -> QuizSet {
        QuizSet::new(self.label, self.questions)
    }

    fn answering_index(&self) -> Result<usize, SessionError> {
        match self.state() {
            SessionState::Answering { index } => Ok(index),
            SessionState::Finished { .. } => Err(SessionError::Finished),
        }
    }

    fn step(&mut self, at: DateTime<Utc>) -> SessionState {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finish(at);
        }
        self.state()
    }

    fn feedback_for(&self, index: usize, chosen: usize) -> Option<AnswerFeedback> {
        let question = self.questions.get(index)?;
        Some(AnswerFeedback {
            question_index: index,
            chosen_index: chosen,
            chosen_text: question.option(chosen)?.to_string(),
            correct_index: question.correct_index(),
            correct_text: question.correct_option().to_string(),
            is_correct: question.is_correct(chosen),
            explanation: question.explanation().to_string(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("label", &self.label)
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
