//! Trellis Search Crate
//!
//! Elasticsearch integration for the movie catalogue. Talks to the index over
//! its REST API with `reqwest` and implements
//! [`trellis_core::movies::MovieRepositoryTrait`].
//!
//! - [`client`]: HTTP client with optional basic auth
//! - [`query_builder`]: paginated search request builder
//! - [`movie_index`]: repository implementation
//! - [`bootstrap`]: index creation and sample data on startup

pub mod bootstrap;
pub mod client;
pub mod errors;
mod models;
pub mod movie_index;
pub mod query_builder;

pub use bootstrap::{bootstrap, seed_movies};
pub use client::{ElasticClient, ElasticConfig};
pub use errors::SearchError;
pub use movie_index::{MovieIndex, MOVIE_INDEX};
pub use query_builder::build_search_request;
