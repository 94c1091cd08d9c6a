use async_trait::async_trait;

use super::travel_model::{
    Country, CountryUpdate, NewCountry, NewPlace, Place, PlaceDraft, PlaceUpdate,
};
use crate::errors::Result;

/// Trait for travel blog storage operations.
///
/// Countries are always returned with their places loaded, ordered by
/// `visited_at DESC NULLS LAST, name`. Countries themselves are ordered by
/// name.
#[async_trait]
pub trait TravelRepositoryTrait: Send + Sync {
    async fn list_countries(&self) -> Result<Vec<Country>>;
    async fn get_country(&self, country_id: i64) -> Result<Option<Country>>;
    async fn insert_country(&self, new_country: NewCountry) -> Result<Country>;
    /// Overwrite the editable columns of `country`. Returns rows affected.
    async fn update_country(&self, country: &Country) -> Result<usize>;
    /// Deletes the country and, by cascade, its places. Returns rows affected.
    async fn delete_country(&self, country_id: i64) -> Result<usize>;

    async fn get_place(&self, place_id: i64) -> Result<Option<Place>>;
    async fn insert_place(&self, country_id: i64, draft: PlaceDraft) -> Result<Place>;
    /// Overwrite the editable columns of `place`. Returns rows affected.
    async fn update_place(&self, place: &Place) -> Result<usize>;
    async fn delete_place(&self, place_id: i64) -> Result<usize>;
}

/// Trait for travel blog service operations.
///
/// Place mutations answer with the parent country so clients can re-render it.
#[async_trait]
pub trait TravelServiceTrait: Send + Sync {
    async fn list_countries(&self) -> Result<Vec<Country>>;
    async fn get_country(&self, country_id: i64) -> Result<Country>;
    async fn create_country(&self, new_country: NewCountry) -> Result<Country>;
    async fn update_country(&self, country_id: i64, update: CountryUpdate) -> Result<Country>;
    async fn delete_country(&self, country_id: i64) -> Result<()>;

    async fn create_place(&self, country_id: i64, new_place: NewPlace) -> Result<Country>;
    async fn update_place(&self, place_id: i64, update: PlaceUpdate) -> Result<Country>;
    async fn delete_place(&self, place_id: i64) -> Result<Country>;
}
