mod loader;
mod progress;
mod service;
mod shuffle;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use loader::QuizLoader;
pub use progress::SessionProgress;
pub use service::{AnswerOutcome, Answers, QuizSession, SessionState, score};
pub use shuffle::{shuffle_options, shuffle_questions};
pub use view::{AnswerFeedback, QuestionView, QuizSummary, ReviewItem};
pub use workflow::QuizLoopService;
