//! Movie repository backed by an Elasticsearch index.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::{debug, warn};

use trellis_core::errors::Result;
use trellis_core::movies::{Movie, MovieRepositoryTrait};
use trellis_core::search::{SearchHits, SearchQuery};

use crate::client::{doc_path, ElasticClient};
use crate::errors::SearchError;
use crate::models::{GetResponse, MovieDocument, SearchResponse};
use crate::query_builder::build_search_request;

/// Default index name
pub const MOVIE_INDEX: &str = "movies";

/// Movie documents stored in one Elasticsearch index.
#[derive(Clone)]
pub struct MovieIndex {
    client: ElasticClient,
    index: String,
}

impl MovieIndex {
    pub fn new(client: ElasticClient) -> Self {
        Self::with_index(client, MOVIE_INDEX)
    }

    pub fn with_index(client: ElasticClient, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    pub fn client(&self) -> &ElasticClient {
        &self.client
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    async fn run_search(&self, query: &SearchQuery) -> std::result::Result<SearchHits<Movie>, SearchError> {
        let body = build_search_request(query);
        let response = self
            .client
            .request(Method::POST, &format!("/{}/_search", self.index))
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::from_response(response).await);
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse<MovieDocument> = serde_json::from_slice(&bytes)?;
        let items = parsed
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.source.into_movie(hit.id))
            .collect();
        Ok(SearchHits {
            total: parsed.hits.total.value,
            items,
        })
    }

    async fn fetch(&self, movie_id: &str) -> std::result::Result<Option<Movie>, SearchError> {
        let response = self
            .client
            .request(Method::GET, &doc_path(&self.index, movie_id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SearchError::from_response(response).await);
        }

        let bytes = response.bytes().await?;
        let parsed: GetResponse<MovieDocument> = serde_json::from_slice(&bytes)?;
        if !parsed.found {
            return Ok(None);
        }
        Ok(parsed.source.map(|doc| doc.into_movie(parsed.id)))
    }

    /// Index `movie` under its id and wait for the next refresh.
    pub(crate) async fn put(&self, movie: &Movie) -> std::result::Result<(), SearchError> {
        let response = self
            .client
            .request(
                Method::PUT,
                &format!("{}?refresh=true", doc_path(&self.index, &movie.id)),
            )
            .json(&MovieDocument::from(movie))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::from_response(response).await);
        }
        Ok(())
    }

    async fn remove(&self, movie_id: &str) -> std::result::Result<bool, SearchError> {
        let response = self
            .client
            .request(
                Method::DELETE,
                &format!("{}?refresh=true", doc_path(&self.index, movie_id)),
            )
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(SearchError::from_response(response).await);
        }
        Ok(true)
    }
}

#[async_trait]
impl MovieRepositoryTrait for MovieIndex {
    async fn search(&self, query: &SearchQuery) -> Result<SearchHits<Movie>> {
        self.run_search(query).await.map_err(|e| {
            warn!("Movie search failed: {}", e);
            e.into()
        })
    }

    async fn get_by_id(&self, movie_id: &str) -> Result<Option<Movie>> {
        Ok(self.fetch(movie_id).await?)
    }

    async fn save(&self, movie: &Movie) -> Result<Movie> {
        self.put(movie).await?;
        debug!("Indexed movie {}", movie.id);
        Ok(movie.clone())
    }

    async fn delete(&self, movie_id: &str) -> Result<bool> {
        let deleted = self.remove(movie_id).await?;
        if deleted {
            debug!("Deleted movie {}", movie_id);
        }
        Ok(deleted)
    }
}
