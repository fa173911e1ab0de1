use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a quiz attempt reacts to answers.
///
/// - `Practice` shows correctness and the explanation after each answer and waits for an explicit advance.
/// - `Test` moves on as soon as an answer is given and only reveals results at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Practice,
    Test,
}

impl QuizMode {
    pub const ALL: [QuizMode; 2] = [QuizMode::Practice, QuizMode::Test];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::Practice => "practice",
            QuizMode::Test => "test",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuizMode::Practice => "Practice Mode",
            QuizMode::Test => "Test Mode",
        }
    }

    /// Whether an answer advances the session without an explicit `advance`.
    #[must_use]
    pub fn auto_advances(self) -> bool {
        matches!(self, QuizMode::Test)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quiz mode: {raw}")]
pub struct ModeParseError {
    pub raw: String,
}

impl FromStr for QuizMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "practice" => Ok(QuizMode::Practice),
            "test" => Ok(QuizMode::Test),
            _ => Err(ModeParseError { raw: s.to_string() }),
        }
    }
}
