use async_trait::async_trait;
use diesel::expression_methods::PgSortExpressionMethods;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use trellis_core::travel::{Country, NewCountry, Place, PlaceDraft, TravelRepositoryTrait};
use trellis_core::Result;

use super::model::{
    CountryChangeset, CountryDB, NewCountryDB, NewPlaceDB, PlaceChangeset, PlaceDB,
};
use crate::db::DbExecutor;
use crate::errors::IntoCore;
use crate::schema::{countries, places};

pub struct TravelRepository {
    executor: DbExecutor,
}

impl TravelRepository {
    pub fn new(executor: DbExecutor) -> Self {
        TravelRepository { executor }
    }
}

/// Places of one country, most recent visit first, undated last.
fn load_places(conn: &mut PgConnection, country_id: i64) -> Result<Vec<PlaceDB>> {
    places::table
        .filter(places::country_id.eq(country_id))
        .order((places::visited_at.desc().nulls_last(), places::name.asc()))
        .select(PlaceDB::as_select())
        .load::<PlaceDB>(conn)
        .into_core()
}

fn load_country(conn: &mut PgConnection, country_id: i64) -> Result<Option<Country>> {
    let country = countries::table
        .find(country_id)
        .select(CountryDB::as_select())
        .first::<CountryDB>(conn)
        .optional()
        .into_core()?;
    match country {
        Some(country) => {
            let places = load_places(conn, country.id)?;
            Ok(Some(country.into_domain(places)))
        }
        None => Ok(None),
    }
}

#[async_trait]
impl TravelRepositoryTrait for TravelRepository {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        self.executor
            .read(|conn| -> Result<Vec<Country>> {
                let countries_db = countries::table
                    .order(countries::name.asc())
                    .select(CountryDB::as_select())
                    .load::<CountryDB>(conn)
                    .into_core()?;
                let places_db = PlaceDB::belonging_to(&countries_db)
                    .order((places::visited_at.desc().nulls_last(), places::name.asc()))
                    .select(PlaceDB::as_select())
                    .load::<PlaceDB>(conn)
                    .into_core()?;
                Ok(places_db
                    .grouped_by(&countries_db)
                    .into_iter()
                    .zip(countries_db)
                    .map(|(places, country)| country.into_domain(places))
                    .collect())
            })
            .await
    }

    async fn get_country(&self, country_id: i64) -> Result<Option<Country>> {
        self.executor
            .read(move |conn| load_country(conn, country_id))
            .await
    }

    async fn insert_country(&self, new_country: NewCountry) -> Result<Country> {
        self.executor
            .exec(move |conn| -> Result<Country> {
                let row: NewCountryDB = new_country.into();
                let inserted = diesel::insert_into(countries::table)
                    .values(&row)
                    .returning(CountryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(inserted.into_domain(Vec::new()))
            })
            .await
    }

    async fn update_country(&self, country: &Country) -> Result<usize> {
        let country_id = country.id;
        let changeset = CountryChangeset::from(country);
        self.executor
            .exec(move |conn| {
                diesel::update(countries::table.find(country_id))
                    .set(&changeset)
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_country(&self, country_id: i64) -> Result<usize> {
        self.executor
            .exec(move |conn| {
                diesel::delete(countries::table.find(country_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn get_place(&self, place_id: i64) -> Result<Option<Place>> {
        self.executor
            .read(move |conn| -> Result<Option<Place>> {
                let place = places::table
                    .find(place_id)
                    .select(PlaceDB::as_select())
                    .first::<PlaceDB>(conn)
                    .optional()
                    .into_core()?;
                Ok(place.map(Place::from))
            })
            .await
    }

    async fn insert_place(&self, country_id: i64, draft: PlaceDraft) -> Result<Place> {
        self.executor
            .exec(move |conn| -> Result<Place> {
                let row = NewPlaceDB::from_draft(country_id, draft);
                let inserted = diesel::insert_into(places::table)
                    .values(&row)
                    .returning(PlaceDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Place::from(inserted))
            })
            .await
    }

    async fn update_place(&self, place: &Place) -> Result<usize> {
        let place_id = place.id;
        let changeset = PlaceChangeset::from(place);
        self.executor
            .exec(move |conn| {
                diesel::update(places::table.find(place_id))
                    .set(&changeset)
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_place(&self, place_id: i64) -> Result<usize> {
        self.executor
            .exec(move |conn| {
                diesel::delete(places::table.find(place_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
