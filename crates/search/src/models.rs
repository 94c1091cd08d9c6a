//! Elasticsearch response and document models.
//!
//! Only the fields we read are modelled. `_source` decodes into
//! [`MovieDocument`], so a field with the wrong JSON type fails the request
//! instead of silently becoming a default.

use serde::{Deserialize, Serialize};
use trellis_core::movies::Movie;

/// A movie as stored in the index. The id lives in `_id`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub release_year: i32,
}

impl MovieDocument {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            genre: self.genre,
            rating: self.rating,
            release_year: self.release_year,
        }
    }
}

impl From<&Movie> for MovieDocument {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            release_year: movie.release_year,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: HitsEnvelope<T>,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope<T> {
    pub total: TotalHits,
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
pub struct TotalHits {
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: T,
}

/// Response of `GET /{index}/_doc/{id}`
#[derive(Debug, Deserialize)]
pub struct GetResponse<T> {
    #[serde(rename = "_id")]
    pub id: String,
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}
