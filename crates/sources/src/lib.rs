#![forbid(unsafe_code)]

pub mod fs;
pub mod http;
pub mod memory;
pub mod parse;
pub mod source;

pub use fs::FileSource;
pub use http::HttpSource;
pub use memory::InMemorySource;
pub use parse::parse_question_set;
pub use source::{QuestionSource, SourceError};
