use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::Question;

use crate::parse::parse_question_set;
use crate::source::{QuestionSource, SourceError};

/// Reads question sets from disk, resolving set paths under `root`.
///
/// Set paths are web-style (`/assets/questions1.json`); the leading slash is dropped.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch_set(&self, path: &str) -> Result<Vec<Question>, SourceError> {
        let file = self.resolve(path);
        tracing::debug!(file = %file.display(), "reading question set");

        let bytes = tokio::fs::read(&file).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_string(),
            },
            _ => SourceError::Io {
                path: path.to_string(),
                message: e.to_string(),
            },
        })?;

        parse_question_set(path, &bytes)
    }
}
