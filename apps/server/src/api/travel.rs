use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use trellis_core::travel::{Country, CountryUpdate, NewCountry, NewPlace, PlaceUpdate};

use crate::{
    error::{ApiJson, ApiPath, ApiResult},
    main_lib::AppState,
};

async fn list_countries(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Country>>> {
    let countries = state.travel()?.list_countries().await?;
    Ok(Json(countries))
}

async fn get_country(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Country>> {
    let country = state.travel()?.get_country(id).await?;
    Ok(Json(country))
}

async fn create_country(
    State(state): State<Arc<AppState>>,
    ApiJson(new_country): ApiJson<NewCountry>,
) -> ApiResult<(StatusCode, Json<Country>)> {
    let country = state.travel()?.create_country(new_country).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

async fn update_country(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<CountryUpdate>,
) -> ApiResult<Json<Country>> {
    let country = state.travel()?.update_country(id, update).await?;
    Ok(Json(country))
}

async fn delete_country(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.travel()?.delete_country(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_place(
    State(state): State<Arc<AppState>>,
    ApiPath(country_id): ApiPath<i64>,
    ApiJson(new_place): ApiJson<NewPlace>,
) -> ApiResult<(StatusCode, Json<Country>)> {
    let country = state.travel()?.create_place(country_id, new_place).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

async fn update_place(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<PlaceUpdate>,
) -> ApiResult<Json<Country>> {
    let country = state.travel()?.update_place(id, update).await?;
    Ok(Json(country))
}

async fn delete_place(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Country>> {
    let country = state.travel()?.delete_place(id).await?;
    Ok(Json(country))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/countries", get(list_countries).post(create_country))
        .route(
            "/countries/{id}",
            get(get_country)
                .put(update_country)
                .patch(update_country)
                .delete(delete_country),
        )
        .route("/countries/{id}/places", post(create_place))
        .route(
            "/places/{id}",
            put(update_place).patch(update_place).delete(delete_place),
        )
}
