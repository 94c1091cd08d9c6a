//! Rate provider abstraction and implementations.
//!
//! This module contains:
//! - The `RateFetcher` trait that every provider implements
//! - The Yahoo Finance chart provider

mod traits;

pub mod yahoo;

pub use traits::RateFetcher;
