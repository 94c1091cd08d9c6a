use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::movies_model::{Movie, MovieSearchResponse, MovieUpdate, NewMovie};
use super::movies_traits::{MovieRepositoryTrait, MovieServiceTrait};
use crate::errors::{Error, Result};
use crate::search::{Pagination, SearchQuery};
use crate::updates::PartialUpdate;

const ENTITY: &str = "Movie";

/// Service for searching and editing movies
pub struct MovieService {
    repository: Arc<dyn MovieRepositoryTrait>,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepositoryTrait>) -> Self {
        Self { repository }
    }

    async fn require(&self, movie_id: &str) -> Result<Movie> {
        self.repository
            .get_by_id(movie_id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, movie_id))
    }
}

#[async_trait::async_trait]
impl MovieServiceTrait for MovieService {
    async fn search_movies(&self, query: SearchQuery) -> Result<MovieSearchResponse> {
        debug!(
            "Searching movies: text='{}', page={}, page_size={}",
            query.text, query.page, query.page_size
        );
        let hits = self.repository.search(&query).await?;
        Ok(MovieSearchResponse {
            pagination: Pagination::new(&query, hits.total),
            movies: hits.items,
        })
    }

    async fn get_movie(&self, movie_id: &str) -> Result<Movie> {
        self.require(movie_id).await
    }

    async fn create_movie(&self, new_movie: NewMovie) -> Result<Movie> {
        let movie = new_movie.validate()?.into_movie(Uuid::new_v4().to_string());
        debug!("Creating movie {} ({})", movie.id, movie.title);
        self.repository.save(&movie).await
    }

    async fn replace_movie(&self, movie_id: &str, movie: NewMovie) -> Result<Movie> {
        let movie = movie.validate()?;
        self.require(movie_id).await?;
        self.repository
            .save(&movie.into_movie(movie_id.to_string()))
            .await
    }

    async fn update_movie(&self, movie_id: &str, update: MovieUpdate) -> Result<Movie> {
        let current = self.require(movie_id).await?;
        let resolved = update.resolve(current)?;
        self.repository.save(&resolved).await
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<()> {
        if self.repository.delete(movie_id).await? {
            Ok(())
        } else {
            Err(Error::not_found(ENTITY, movie_id))
        }
    }
}
