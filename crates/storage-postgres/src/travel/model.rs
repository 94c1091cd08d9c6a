//! Database models for countries and places.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use trellis_core::travel::{Country, NewCountry, Place, PlaceDraft};

/// Database model for countries
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CountryDB {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for creating a country
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::countries)]
pub struct NewCountryDB {
    pub name: String,
    pub description: String,
}

/// Editable country columns. `updated_at` is maintained by a trigger.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::countries)]
pub struct CountryChangeset {
    pub name: String,
    pub description: String,
}

/// Database model for places
#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(CountryDB, foreign_key = country_id))]
#[diesel(table_name = crate::schema::places)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlaceDB {
    pub id: i64,
    pub country_id: i64,
    pub name: String,
    pub category: String,
    pub city: String,
    pub description: String,
    pub visited_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for creating a place
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::places)]
pub struct NewPlaceDB {
    pub country_id: i64,
    pub name: String,
    pub category: String,
    pub city: String,
    pub description: String,
    pub visited_at: Option<NaiveDate>,
}

/// Editable place columns. A `None` visit date writes NULL.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::places)]
#[diesel(treat_none_as_null = true)]
pub struct PlaceChangeset {
    pub name: String,
    pub category: String,
    pub city: String,
    pub description: String,
    pub visited_at: Option<NaiveDate>,
}

// Conversion to domain models

impl CountryDB {
    pub fn into_domain(self, places: Vec<PlaceDB>) -> Country {
        Country {
            id: self.id,
            name: self.name,
            description: self.description,
            places: places.into_iter().map(Place::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<PlaceDB> for Place {
    fn from(db: PlaceDB) -> Self {
        Self {
            id: db.id,
            country_id: db.country_id,
            name: db.name,
            category: db.category,
            city: db.city,
            description: db.description,
            visited_at: db.visited_at,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCountry> for NewCountryDB {
    fn from(domain: NewCountry) -> Self {
        Self {
            name: domain.name,
            description: domain.description,
        }
    }
}

impl From<&Country> for CountryChangeset {
    fn from(domain: &Country) -> Self {
        Self {
            name: domain.name.clone(),
            description: domain.description.clone(),
        }
    }
}

impl NewPlaceDB {
    pub fn from_draft(country_id: i64, draft: PlaceDraft) -> Self {
        Self {
            country_id,
            name: draft.name,
            category: draft.category,
            city: draft.city,
            description: draft.description,
            visited_at: draft.visited_at,
        }
    }
}

impl From<&Place> for PlaceChangeset {
    fn from(domain: &Place) -> Self {
        Self {
            name: domain.name.clone(),
            category: domain.category.clone(),
            city: domain.city.clone(),
            description: domain.description.clone(),
            visited_at: domain.visited_at,
        }
    }
}
