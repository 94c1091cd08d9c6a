use async_trait::async_trait;

use super::movies_model::{Movie, MovieSearchResponse, MovieUpdate, NewMovie};
use crate::errors::Result;
use crate::search::{SearchHits, SearchQuery};

/// Trait for movie index operations
#[async_trait]
pub trait MovieRepositoryTrait: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchHits<Movie>>;
    async fn get_by_id(&self, movie_id: &str) -> Result<Option<Movie>>;
    /// Index `movie` under its id, replacing any existing document.
    async fn save(&self, movie: &Movie) -> Result<Movie>;
    /// Returns false when no document had that id.
    async fn delete(&self, movie_id: &str) -> Result<bool>;
}

/// Trait for movie service operations
#[async_trait]
pub trait MovieServiceTrait: Send + Sync {
    async fn search_movies(&self, query: SearchQuery) -> Result<MovieSearchResponse>;
    async fn get_movie(&self, movie_id: &str) -> Result<Movie>;
    async fn create_movie(&self, new_movie: NewMovie) -> Result<Movie>;
    async fn replace_movie(&self, movie_id: &str, movie: NewMovie) -> Result<Movie>;
    async fn update_movie(&self, movie_id: &str, update: MovieUpdate) -> Result<Movie>;
    async fn delete_movie(&self, movie_id: &str) -> Result<()>;
}
