//! Movies module - domain models, services, and traits.

mod movies_model;
mod movies_service;
mod movies_traits;

pub use movies_model::{Movie, MovieSearchResponse, MovieUpdate, NewMovie};
pub use movies_service::MovieService;
pub use movies_traits::{MovieRepositoryTrait, MovieServiceTrait};


#[cfg(test)]
mod movies_service_tests;
