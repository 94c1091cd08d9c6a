//! Thin Elasticsearch REST client.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};

use crate::errors::SearchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticConfig {
    pub address: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ElasticConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            username: None,
            password: None,
        }
    }

    pub fn with_basic_auth(mut self, username: Option<String>, password: Option<String>) -> Self {
        self.username = username;
        self.password = password;
        self
    }
}

/// HTTP client bound to one Elasticsearch node.
#[derive(Clone)]
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl ElasticClient {
    pub fn new(config: ElasticConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.address.trim_end_matches('/').to_string(),
            username: config.username.filter(|u| !u.is_empty()),
            password: config.password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to `path` (which must begin with `/`), applying auth.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.username {
            Some(user) => builder.basic_auth(user, self.password.as_deref()),
            None => builder,
        }
    }
}

/// Path to a single document, with the id percent-encoded.
pub(crate) fn doc_path(index: &str, id: &str) -> String {
    format!("/{}/_doc/{}", index, urlencoding::encode(id))
}
