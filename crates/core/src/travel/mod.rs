//! Travel module - countries and the places visited in them.

mod travel_model;
mod travel_service;
mod travel_traits;

pub use travel_model::{
    parse_visited_at, Country, CountryUpdate, NewCountry, NewPlace, Place, PlaceDraft,
    PlaceUpdate,
};
pub use travel_service::TravelService;
pub use travel_traits::{TravelRepositoryTrait, TravelServiceTrait};
