//! PostgreSQL storage implementation for countries and places.

mod model;
mod repository;

pub use model::{CountryChangeset, CountryDB, NewCountryDB, NewPlaceDB, PlaceChangeset, PlaceDB};
pub use repository::TravelRepository;
