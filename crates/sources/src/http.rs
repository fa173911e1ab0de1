use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::{Client, StatusCode};

use crate::parse::parse_question_set;
use crate::source::{QuestionSource, SourceError};

/// Fetches question sets with a plain `GET {base_url}{path}`.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch_set(&self, path: &str) -> Result<Vec<Question>, SourceError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "fetching question set");

        let connection = |e: reqwest::Error| SourceError::Connection {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(connection)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(connection)?;
        parse_question_set(path, &body)
    }
}
