mod catalog_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use catalog_vm::{ModeButtonVm, SetButtonVm, aggregate_button, map_set_buttons, mode_buttons};
pub use quiz_vm::{FeedbackVm, OptionMark, OptionVm, QuestionCardVm, QuizStep, QuizVm};
pub use results_vm::{ResultsVm, ReviewItemVm, map_results};
pub use time_fmt::format_elapsed;
