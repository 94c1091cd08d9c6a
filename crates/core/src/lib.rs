//! Trellis Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic shared by the three demo backends
//! (currency converter, movie search, travel blog). It knows nothing about
//! HTTP, Elasticsearch or Postgres: external systems are reached through the
//! repository traits defined here and implemented by the `search` and
//! `storage-postgres` crates.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod movies;
pub mod search;
pub mod travel;
pub mod updates;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
