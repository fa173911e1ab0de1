mod mode_select;
mod quiz;
mod results;
mod set_select;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use mode_select::ModeSelectView;
pub use quiz::QuizView;
pub use results::ResultsPanel;
pub use set_select::SetSelectView;
pub use state::{ViewError, ViewState, view_state_from_resource};
