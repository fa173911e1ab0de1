use quiz_core::model::QuizMode;
use services::{AnswerOutcome, QuizLoopService, QuizSession, SessionState};

use crate::views::ViewError;
use crate::vm::results_vm::{ResultsVm, map_results};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Pending,
    Correct,
    Wrong,
}

impl OptionMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionMark::Plain => "quiz-option",
            OptionMark::Pending => "quiz-option quiz-option--pending",
            OptionMark::Correct => "quiz-option quiz-option--correct",
            OptionMark::Wrong => "quiz-option quiz-option--wrong",
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            OptionMark::Correct => " (Correct)",
            OptionMark::Wrong => " (Wrong)",
            OptionMark::Plain | OptionMark::Pending => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub mark: OptionMark,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub title: String,
    pub prompt: String,
    pub progress_label: String,
    pub progress_percent: u8,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub headline: &'static str,
    pub is_correct: bool,
    /// Only set when the chosen option was wrong.
    pub correct_answer: Option<String>,
    pub explanation: String,
    pub next_label: &'static str,
}

/// What a user action did to the quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStep {
    /// Nothing changed, e.g. a click while options were locked.
    Unchanged,
    /// Test mode: the option is highlighted and must be committed after the answer delay.
    Pending,
    /// The answer or advance was applied and the quiz continues.
    Applied,
    Finished,
}

/// Screen state for one quiz attempt: the session plus the test-mode option waiting to be
/// committed.
pub struct QuizVm {
    session: QuizSession,
    pending: Option<usize>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            pending: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.session.mode()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.session.label()
    }

    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let view = self.session.current_question()?;
        let progress = self.session.progress();
        let feedback = self.session.feedback();
        let locked = self.pending.is_some() || feedback.is_some();

        let options = view
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mark = match (&feedback, self.pending) {
                    (Some(fb), _) if index == fb.chosen_index && !fb.is_correct => OptionMark::Wrong,
                    (Some(fb), _) if index == fb.correct_index => OptionMark::Correct,
                    (None, Some(pending)) if pending == index => OptionMark::Pending,
                    _ => OptionMark::Plain,
                };
                OptionVm {
                    index,
                    text: text.clone(),
                    mark,
                    disabled: locked,
                }
            })
            .collect();

        Some(QuestionCardVm {
            title: format!("Question {} of {}", view.number(), view.total),
            prompt: view.prompt.to_string(),
            progress_label: format!("({}/{})", progress.position, progress.total),
            progress_percent: progress.percent(),
            options,
        })
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        let feedback = self.session.feedback()?;
        let is_last = self.session.progress().position == self.session.total();
        Some(FeedbackVm {
            headline: if feedback.is_correct { "Correct!" } else { "Wrong!" },
            is_correct: feedback.is_correct,
            correct_answer: (!feedback.is_correct).then_some(feedback.correct_text),
            explanation: feedback.explanation,
            next_label: if is_last { "See Results" } else { "Next" },
        })
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        self.session.summary().as_ref().map(map_results)
    }

    /// Apply a click on `option`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session rejects the answer.
    pub fn choose(
        &mut self,
        quiz_loop: &QuizLoopService,
        option: usize,
    ) -> Result<QuizStep, ViewError> {
        if self.pending.is_some() || self.session.feedback().is_some() {
            return Ok(QuizStep::Unchanged);
        }
        let Some(view) = self.session.current_question() else {
            return Ok(QuizStep::Unchanged);
        };
        if option >= view.options.len() {
            return Err(ViewError::Unknown);
        }

        match self.mode() {
            QuizMode::Test => {
                self.pending = Some(option);
                Ok(QuizStep::Pending)
            }
            QuizMode::Practice => {
                quiz_loop.answer(&mut self.session, option)?;
                Ok(QuizStep::Applied)
            }
        }
    }

    /// Record the test-mode option chosen before the answer delay, which moves to the next
    /// question or finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session rejects the answer.
    pub fn commit_pending(&mut self, quiz_loop: &QuizLoopService) -> Result<QuizStep, ViewError> {
        let Some(option) = self.pending.take() else {
            return Ok(QuizStep::Unchanged);
        };
        match quiz_loop.answer(&mut self.session, option)? {
            AnswerOutcome::Finished { .. } => Ok(QuizStep::Finished),
            AnswerOutcome::Advanced { .. } | AnswerOutcome::Feedback(_) => Ok(QuizStep::Applied),
        }
    }

    /// Practice mode: leave the answered question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the question has not been answered.
    pub fn next(&mut self, quiz_loop: &QuizLoopService) -> Result<QuizStep, ViewError> {
        match quiz_loop.advance(&mut self.session)? {
            SessionState::Answering { .. } => Ok(QuizStep::Applied),
            SessionState::Finished { .. } => Ok(QuizStep::Finished),
        }
    }

    /// Same questions, reshuffled, starting over.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptySet` if the session held no questions.
    pub fn restart(self, quiz_loop: &QuizLoopService) -> Result<Self, ViewError> {
        Ok(Self::new(quiz_loop.restart(self.session)?))
    }
}
