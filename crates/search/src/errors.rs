//! Search-specific error types and conversions to core errors.

use thiserror::Error;

/// Errors raised while talking to Elasticsearch.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to build search client: {0}")]
    Client(String),

    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Build a status error, reading at most a short prefix of the body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let body = body.chars().take(512).collect();
        SearchError::Status { status, body }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

impl From<SearchError> for trellis_core::Error {
    fn from(err: SearchError) -> Self {
        trellis_core::Error::Search(err.to_string())
    }
}
