use std::sync::Arc;
use std::time::Duration;

use services::QuizLoopService;

/// Pause between a test-mode click and the automatic move to the next question.
pub const DEFAULT_ANSWER_DELAY: Duration = Duration::from_millis(300);

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    fn answer_delay(&self) -> Duration {
        DEFAULT_ANSWER_DELAY
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    answer_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            answer_delay: app.answer_delay(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn answer_delay(&self) -> Duration {
        self.answer_delay
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
