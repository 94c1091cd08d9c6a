use log::debug;
use std::sync::Arc;

use super::travel_model::{Country, CountryUpdate, NewCountry, NewPlace, PlaceUpdate};
use super::travel_traits::{TravelRepositoryTrait, TravelServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::updates::PartialUpdate;

const COUNTRY: &str = "Country";
const PLACE: &str = "Place";

/// Service for the travel blog: countries and their places
pub struct TravelService {
    repository: Arc<dyn TravelRepositoryTrait>,
}

impl TravelService {
    pub fn new(repository: Arc<dyn TravelRepositoryTrait>) -> Self {
        Self { repository }
    }

    async fn require_country(&self, country_id: i64) -> Result<Country> {
        self.repository
            .get_country(country_id)
            .await?
            .ok_or_else(|| Error::not_found(COUNTRY, country_id))
    }
}

#[async_trait::async_trait]
impl TravelServiceTrait for TravelService {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        self.repository.list_countries().await
    }

    async fn get_country(&self, country_id: i64) -> Result<Country> {
        self.require_country(country_id).await
    }

    async fn create_country(&self, new_country: NewCountry) -> Result<Country> {
        let new_country = new_country.validate()?;
        debug!("Creating country '{}'", new_country.name);
        self.repository.insert_country(new_country).await
    }

    async fn update_country(&self, country_id: i64, update: CountryUpdate) -> Result<Country> {
        let current = self.require_country(country_id).await?;
        let resolved = update.resolve(current)?;
        if self.repository.update_country(&resolved).await? == 0 {
            return Err(Error::not_found(COUNTRY, country_id));
        }
        self.require_country(country_id).await
    }

    async fn delete_country(&self, country_id: i64) -> Result<()> {
        if self.repository.delete_country(country_id).await? == 0 {
            return Err(Error::not_found(COUNTRY, country_id));
        }
        debug!("Deleted country {} and its places", country_id);
        Ok(())
    }

    async fn create_place(&self, country_id: i64, new_place: NewPlace) -> Result<Country> {
        let draft = new_place.validate()?;
        self.require_country(country_id).await?;
        // The country may be deleted between the check and the insert.
        let place = self
            .repository
            .insert_place(country_id, draft)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::ForeignKeyViolation(_)) => {
                    Error::not_found(COUNTRY, country_id)
                }
                other => other,
            })?;
        debug!("Added place {} to country {}", place.id, country_id);
        self.require_country(country_id).await
    }

    async fn update_place(&self, place_id: i64, update: PlaceUpdate) -> Result<Country> {
        let current = self
            .repository
            .get_place(place_id)
            .await?
            .ok_or_else(|| Error::not_found(PLACE, place_id))?;
        let country_id = current.country_id;
        let resolved = update.resolve(current)?;
        if self.repository.update_place(&resolved).await? == 0 {
            return Err(Error::not_found(PLACE, place_id));
        }
        self.require_country(country_id).await
    }

    async fn delete_place(&self, place_id: i64) -> Result<Country> {
        let place = self
            .repository
            .get_place(place_id)
            .await?
            .ok_or_else(|| Error::not_found(PLACE, place_id))?;
        if self.repository.delete_place(place_id).await? == 0 {
            return Err(Error::not_found(PLACE, place_id));
        }
        self.require_country(place.country_id).await
    }
}
