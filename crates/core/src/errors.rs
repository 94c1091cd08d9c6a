//! Core error types for the Trellis backends.
//!
//! This module defines backend-agnostic error types. Storage and search
//! specific errors (Diesel, Postgres, Elasticsearch) are converted to these
//! types by the crates that own those integrations.

use thiserror::Error;

use trellis_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type shared by every service.
///
/// The HTTP layer maps each variant to a status code. Messages of
/// `Validation` and `NotFound` are safe to show to clients; everything else
/// may carry backend detail and is only logged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Search operation failed: {0}")]
    Search(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),
}

impl Error {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Error::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Backend-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert Diesel and pool errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
///
/// Display strings are returned to clients verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} cannot be null")]
    NullNotAllowed(String),

    #[error("{0} cannot be empty")]
    EmptyField(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid {field} format, expected {expected}")]
    InvalidFormat { field: String, expected: String },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NullNotAllowed(field)
            | ValidationError::EmptyField(field)
            | ValidationError::InvalidFormat { field, .. } => Some(field),
            _ => None,
        }
    }
}
