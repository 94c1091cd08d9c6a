//! PostgreSQL storage for the travel blog.
//!
//! Implements the repository traits of `trellis-core` with Diesel. All
//! Diesel work is blocking and runs on Tokio's blocking pool through
//! [`db::DbExecutor`]; storage errors are converted into
//! `trellis_core::Error` before leaving this crate.

pub mod db;
pub mod errors;
pub mod schema;
pub mod travel;

pub use db::{create_pool, run_migrations, DbExecutor, DbPool};
pub use errors::StorageError;
pub use travel::TravelRepository;
