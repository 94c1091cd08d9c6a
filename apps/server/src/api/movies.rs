use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use trellis_core::movies::{Movie, MovieSearchResponse, MovieUpdate, NewMovie};
use trellis_core::search::SearchQuery;

use crate::{
    error::{ApiJson, ApiPath, ApiQuery, ApiResult},
    main_lib::AppState,
};

/// Raw search parameters. Numbers stay strings so bad values fall back to
/// defaults instead of rejecting the request.
#[derive(Deserialize)]
struct MovieSearchParams {
    q: Option<String>,
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

async fn search_movies(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MovieSearchParams>,
) -> ApiResult<Json<MovieSearchResponse>> {
    let query = SearchQuery::from_params(
        params.q.as_deref(),
        params.page.as_deref(),
        params.page_size.as_deref(),
    );
    let response = state.movies()?.search_movies(query).await?;
    Ok(Json(response))
}

async fn get_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.movies()?.get_movie(&id).await?;
    Ok(Json(movie))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    ApiJson(new_movie): ApiJson<NewMovie>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let movie = state.movies()?.create_movie(new_movie).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn replace_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
    ApiJson(movie): ApiJson<NewMovie>,
) -> ApiResult<Json<Movie>> {
    let movie = state.movies()?.replace_movie(&id, movie).await?;
    Ok(Json(movie))
}

async fn update_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
    ApiJson(update): ApiJson<MovieUpdate>,
) -> ApiResult<Json<Movie>> {
    let movie = state.movies()?.update_movie(&id, update).await?;
    Ok(Json(movie))
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state.movies()?.delete_movie(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(search_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie)
                .put(replace_movie)
                .patch(update_movie)
                .delete(delete_movie),
        )
}
