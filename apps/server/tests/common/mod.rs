#![allow(dead_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tower::ServiceExt;
use trellis_core::fx::ConversionService;
use trellis_core::movies::{Movie, MovieRepositoryTrait, MovieService};
use trellis_core::search::{SearchHits, SearchQuery};
use trellis_core::travel::{
    Country, NewCountry, Place, PlaceDraft, TravelRepositoryTrait, TravelService,
};
use trellis_core::Result;
use trellis_market_data::{CurrencyPair, MarketDataError, Rate, RateFetcher};
use trellis_server::{api::app_router, config::Config, AppState};

pub struct FixedRateFetcher {
    pub price: Decimal,
}

#[async_trait]
impl RateFetcher for FixedRateFetcher {
    fn id(&self) -> &'static str {
        "FIXED"
    }

    async fn fetch(&self, pair: &CurrencyPair) -> std::result::Result<Rate, MarketDataError> {
        if self.price.is_zero() {
            return Err(MarketDataError::fetch_failed(
                pair.yahoo_symbol(),
                "missing or zero regularMarketPrice",
            ));
        }
        Ok(Rate {
            pair: pair.clone(),
            price: self.price,
            source: "yahoo-finance".to_string(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryMovies {
    pub movies: Mutex<BTreeMap<String, Movie>>,
}

impl InMemoryMovies {
    pub fn with(movies: Vec<Movie>) -> Self {
        let store = Self::default();
        {
            let mut map = store.movies.lock().unwrap();
            for movie in movies {
                map.insert(movie.id.clone(), movie);
            }
        }
        store
    }
}

#[async_trait]
impl MovieRepositoryTrait for InMemoryMovies {
    async fn search(&self, query: &SearchQuery) -> Result<SearchHits<Movie>> {
        let needle = query.text.to_lowercase();
        let mut hits: Vec<Movie> = self
            .movies
            .lock()
            .unwrap()
            .values()
            .filter(|m| query.is_match_all() || m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap()
                .then_with(|| a.title.cmp(&b.title))
        });
        let total = hits.len() as i64;
        let items = hits
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .collect();
        Ok(SearchHits { total, items })
    }

    async fn get_by_id(&self, movie_id: &str) -> Result<Option<Movie>> {
        Ok(self.movies.lock().unwrap().get(movie_id).cloned())
    }

    async fn save(&self, movie: &Movie) -> Result<Movie> {
        self.movies
            .lock()
            .unwrap()
            .insert(movie.id.clone(), movie.clone());
        Ok(movie.clone())
    }

    async fn delete(&self, movie_id: &str) -> Result<bool> {
        Ok(self.movies.lock().unwrap().remove(movie_id).is_some())
    }
}

#[derive(Default)]
struct TravelStore {
    countries: BTreeMap<i64, Country>,
    places: BTreeMap<i64, Place>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryTravel {
    store: Mutex<TravelStore>,
}

impl InMemoryTravel {
    fn assemble(store: &TravelStore, country: &Country) -> Country {
        let mut places: Vec<Place> = store
            .places
            .values()
            .filter(|p| p.country_id == country.id)
            .cloned()
            .collect();
        places.sort_by(|a, b| match (a.visited_at, b.visited_at) {
            (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.name.cmp(&b.name)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        });
        Country {
            places,
            ..country.clone()
        }
    }
}

#[async_trait]
impl TravelRepositoryTrait for InMemoryTravel {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        let store = self.store.lock().unwrap();
        let mut countries: Vec<Country> = store
            .countries
            .values()
            .map(|c| Self::assemble(&store, c))
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }

    async fn get_country(&self, country_id: i64) -> Result<Option<Country>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .countries
            .get(&country_id)
            .map(|c| Self::assemble(&store, c)))
    }

    async fn insert_country(&self, new_country: NewCountry) -> Result<Country> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let country = Country {
            id: store.next_id,
            name: new_country.name,
            description: new_country.description,
            places: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        store.countries.insert(country.id, country.clone());
        Ok(country)
    }

    async fn update_country(&self, country: &Country) -> Result<usize> {
        let mut store = self.store.lock().unwrap();
        match store.countries.get_mut(&country.id) {
            Some(existing) => {
                existing.name = country.name.clone();
                existing.description = country.description.clone();
                existing.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_country(&self, country_id: i64) -> Result<usize> {
        let mut store = self.store.lock().unwrap();
        let removed = store.countries.remove(&country_id).map_or(0, |_| 1);
        store.places.retain(|_, p| p.country_id != country_id);
        Ok(removed)
    }

    async fn get_place(&self, place_id: i64) -> Result<Option<Place>> {
        Ok(self.store.lock().unwrap().places.get(&place_id).cloned())
    }

    async fn insert_place(&self, country_id: i64, draft: PlaceDraft) -> Result<Place> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let place = Place {
            id: store.next_id,
            country_id,
            name: draft.name,
            category: draft.category,
            city: draft.city,
            description: draft.description,
            visited_at: draft.visited_at,
            created_at: now,
            updated_at: now,
        };
        store.places.insert(place.id, place.clone());
        Ok(place)
    }

    async fn update_place(&self, place: &Place) -> Result<usize> {
        let mut store = self.store.lock().unwrap();
        match store.places.get_mut(&place.id) {
            Some(existing) => {
                *existing = place.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_place(&self, place_id: i64) -> Result<usize> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .places
            .remove(&place_id)
            .map_or(0, |_| 1))
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        request_timeout: Duration::from_secs(5),
        yahoo_chart_url: "http://127.0.0.1:1".to_string(),
        elastic: None,
        database_url: None,
    }
}

/// Router with a fixed FX rate and in-memory movie and travel stores.
pub fn build_router(price: Decimal, movies: Vec<Movie>) -> Router {
    let state = AppState {
        conversion_service: Arc::new(ConversionService::new(Arc::new(FixedRateFetcher {
            price,
        }))),
        movie_service: Some(Arc::new(MovieService::new(Arc::new(InMemoryMovies::with(
            movies,
        ))))),
        travel_service: Some(Arc::new(TravelService::new(Arc::new(
            InMemoryTravel::default(),
        )))),
    };
    app_router(Arc::new(state), &test_config())
}

/// Router with only the currency converter configured.
pub fn build_bare_router() -> Router {
    let state = AppState {
        conversion_service: Arc::new(ConversionService::new(Arc::new(FixedRateFetcher {
            price: Decimal::ONE,
        }))),
        movie_service: None,
        travel_service: None,
    };
    app_router(Arc::new(state), &test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    dispatch(app, builder.body(body).unwrap()).await
}

/// Send `raw` as-is with a JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    dispatch(app, request).await
}

pub async fn send_raw_without_type(
    app: &Router,
    method: Method,
    uri: &str,
    raw: &str,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(raw.to_string()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn movie(id: &str, title: &str, rating: f64) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        genre: "Drama".to_string(),
        rating,
        release_year: 2000,
    }
}
