//! Movie domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::search::Pagination;
use crate::updates::{patch_format, resolve_required, resolve_required_text, resolve_text};
use crate::updates::{PartialUpdate, Patch};

/// Domain model representing an indexed movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub rating: f64,
    pub release_year: i32,
}

/// Input model for creating a movie or replacing one wholesale.
///
/// Any `id` sent by the client is ignored; the server owns identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovie {
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

impl NewMovie {
    /// Trims text fields and checks the title is present.
    pub fn validate(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title".to_string()).into());
        }
        Ok(Self {
            title,
            description: self.description.trim().to_string(),
            genre: self.genre.trim().to_string(),
            ..self
        })
    }

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

/// Partial update for a movie. Every field is non-nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieUpdate {
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub genre: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub rating: Patch<f64>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub release_year: Patch<i32>,
}

impl PartialUpdate for MovieUpdate {
    type Record = Movie;

    fn resolve(self, current: Movie) -> Result<Movie> {
        Ok(Movie {
            title: resolve_required_text("title", current.title, self.title)?,
            description: resolve_text("description", current.description, self.description)?,
            genre: resolve_text("genre", current.genre, self.genre)?,
            rating: resolve_required("rating", current.rating, self.rating)?,
            release_year: resolve_required("release_year", current.release_year, self.release_year)?,
            id: current.id,
        })
    }
}

/// One page of movie search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSearchResponse {
    pub movies: Vec<Movie>,
    pub pagination: Pagination,
}
