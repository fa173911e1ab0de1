pub mod app;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, DEFAULT_ANSWER_DELAY, UiApp, build_app_context};
