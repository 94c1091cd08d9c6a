//! Travel blog domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::VISITED_AT_FORMAT;
use crate::errors::{Result, ValidationError};
use crate::updates::{
    patch_format, resolve_nullable, resolve_required_text, resolve_text, PartialUpdate, Patch,
};

/// A country with the places visited there
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub places: Vec<Place>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A place visited in a country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
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

/// Input model for creating a country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCountry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewCountry {
    pub fn validate(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name".to_string()).into());
        }
        Ok(Self {
            name,
            description: self.description.trim().to_string(),
        })
    }
}

/// Partial update for a country. `PUT` and `PATCH` share this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryUpdate {
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub description: Patch<String>,
}

impl PartialUpdate for CountryUpdate {
    type Record = Country;

    fn resolve(self, current: Country) -> Result<Country> {
        Ok(Country {
            name: resolve_required_text("name", current.name, self.name)?,
            description: resolve_text("description", current.description, self.description)?,
            ..current
        })
    }
}

/// Input model for adding a place to a country, as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlace {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visited_at: Option<String>,
}

/// A validated place ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDraft {
    pub name: String,
    pub category: String,
    pub city: String,
    pub description: String,
    pub visited_at: Option<NaiveDate>,
}

impl NewPlace {
    pub fn validate(self) -> Result<PlaceDraft> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name".to_string()).into());
        }
        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::EmptyField("category".to_string()).into());
        }
        let visited_at = match self.visited_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_visited_at(raw)?),
        };
        Ok(PlaceDraft {
            name,
            category,
            city: self.city.trim().to_string(),
            description: self.description.trim().to_string(),
            visited_at,
        })
    }
}

/// Partial update for a place. Only `visited_at` may be cleared; an empty
/// string clears it too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceUpdate {
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub category: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub city: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize")]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "patch_format::deserialize_blank_as_null")]
    pub visited_at: Patch<String>,
}

impl PartialUpdate for PlaceUpdate {
    type Record = Place;

    fn resolve(self, current: Place) -> Result<Place> {
        let visited_at = match self.visited_at {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => Some(Some(parse_visited_at(&raw)?)),
        };
        Ok(Place {
            name: resolve_required_text("name", current.name, self.name)?,
            category: resolve_required_text("category", current.category, self.category)?,
            city: resolve_text("city", current.city, self.city)?,
            description: resolve_text("description", current.description, self.description)?,
            visited_at: resolve_nullable(current.visited_at, visited_at),
            ..current
        })
    }
}

/// Parse a `YYYY-MM-DD` visit date.
pub fn parse_visited_at(raw: &str) -> std::result::Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), VISITED_AT_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: "visited_at".to_string(),
            expected: "YYYY-MM-DD".to_string(),
        }
    })
}
