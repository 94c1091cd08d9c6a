//! Index setup run once at startup.
//!
//! Creates the movie index with an explicit mapping when it does not exist,
//! then seeds a handful of sample movies into an empty index so the demo has
//! something to search.

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use trellis_core::movies::Movie;

use crate::errors::SearchError;
use crate::models::CountResponse;
use crate::movie_index::MovieIndex;

/// Index mapping. `title.keyword` backs the deterministic sort tie-breaker.
pub fn movie_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "title": {
                    "type": "text",
                    "fields": { "keyword": { "type": "keyword", "ignore_above": 256 } }
                },
                "description": { "type": "text" },
                "genre": { "type": "keyword" },
                "rating": { "type": "float" },
                "release_year": { "type": "integer" }
            }
        }
    })
}

/// Sample catalogue written into an empty index.
pub fn seed_movies() -> Vec<Movie> {
    let movie = |title: &str, description: &str, genre: &str, rating: f64, year: i32| Movie {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        genre: genre.to_string(),
        rating,
        release_year: year,
    };
    vec![
        movie(
            "Inception",
            "A thief who steals corporate secrets through dream-sharing technology.",
            "Sci-Fi",
            8.8,
            2010,
        ),
        movie(
            "The Dark Knight",
            "Batman battles the Joker in Gotham City.",
            "Action",
            9.0,
            2008,
        ),
        movie(
            "Interstellar",
            "Explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "Sci-Fi",
            8.6,
            2014,
        ),
        movie(
            "La La Land",
            "A jazz pianist falls for an aspiring actress in Los Angeles.",
            "Musical",
            8.0,
            2016,
        ),
        movie(
            "The Godfather",
            "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
            "Crime",
            9.2,
            1972,
        ),
    ]
}

/// Ensure the index exists and holds data.
pub async fn bootstrap(index: &MovieIndex) -> Result<(), SearchError> {
    if !index_exists(index).await? {
        create_index(index).await?;
        info!("Created search index '{}'", index.index());
    }

    let count = count_documents(index).await?;
    if count > 0 {
        info!("Search index '{}' holds {} documents", index.index(), count);
        return Ok(());
    }

    let movies = seed_movies();
    for movie in &movies {
        index.put(movie).await?;
    }
    info!(
        "Seeded search index '{}' with {} movies",
        index.index(),
        movies.len()
    );
    Ok(())
}

async fn index_exists(index: &MovieIndex) -> Result<bool, SearchError> {
    let response = index
        .client()
        .request(Method::HEAD, &format!("/{}", index.index()))
        .send()
        .await?;
    match response.status() {
        StatusCode::OK => Ok(true),
        StatusCode::NOT_FOUND => Ok(false),
        _ => Err(SearchError::from_response(response).await),
    }
}

async fn create_index(index: &MovieIndex) -> Result<(), SearchError> {
    let response = index
        .client()
        .request(Method::PUT, &format!("/{}", index.index()))
        .json(&movie_mapping())
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(SearchError::from_response(response).await);
    }
    Ok(())
}

async fn count_documents(index: &MovieIndex) -> Result<i64, SearchError> {
    let response = index
        .client()
        .request(Method::GET, &format!("/{}/_count", index.index()))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(SearchError::from_response(response).await);
    }
    let bytes = response.bytes().await?;
    let parsed: CountResponse = serde_json::from_slice(&bytes)?;
    Ok(parsed.count)
}
