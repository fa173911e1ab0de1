mod catalog;
mod mode;
mod question;
mod quiz_set;

pub use catalog::{CatalogConfig, CatalogError, ChoiceParseError, QuizCatalog, QuizChoice, SetSource};
pub use mode::{ModeParseError, QuizMode};
pub use question::{Question, QuestionDraft, QuestionError};
pub use quiz_set::QuizSet;
