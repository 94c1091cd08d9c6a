mod common;

use axum::http::{Method, StatusCode};
use rust_decimal_macros::dec;
use serde_json::json;

use common::{build_bare_router, build_router, movie, send};

fn catalogue() -> Vec<trellis_core::movies::Movie> {
    vec![
        movie("m1", "Inception", 8.8),
        movie("m2", "Interstellar", 8.6),
        movie("m3", "The Dark Knight", 9.0),
        movie("m4", "Tenet", 7.3),
        movie("m5", "Memento", 8.4),
    ]
}

#[tokio::test]
async fn empty_query_returns_one_full_page() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::GET, "/api/movies?q=&page=1&pageSize=5", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["movies"].as_array().unwrap().len(), 5);
    assert_eq!(json["movies"][0]["title"], "The Dark Knight");
    assert_eq!(json["pagination"]["total_hits"], 5);
    assert_eq!(json["pagination"]["total_pages"], 1);
}

#[tokio::test]
async fn bad_page_size_falls_back_to_default() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::GET, "/api/movies?pageSize=500&page=abc", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 5);
}

#[tokio::test]
async fn create_then_fetch_movie() {
    let app = build_router(dec!(1), Vec::new());
    let created = send(
        &app,
        Method::POST,
        "/api/movies",
        Some(json!({ "title": "  Heat ", "genre": "Crime", "rating": 8.3, "release_year": 1995 })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let body = created.json();
    assert_eq!(body["title"], "Heat");
    let id = body["id"].as_str().unwrap().to_string();

    let fetched = send(&app, Method::GET, &format!("/api/movies/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["genre"], "Crime");
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let app = build_router(dec!(1), Vec::new());
    let response = send(&app, Method::POST, "/api/movies", Some(json!({ "genre": "Crime" }))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = build_router(dec!(1), Vec::new());
    let response = common::send_raw(&app, Method::POST, "/api/movies", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_keeps_absent_fields() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::PATCH, "/api/movies/m4", Some(json!({ "rating": 7.9 }))).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["rating"], 7.9);
    assert_eq!(json["title"], "Tenet");
    assert_eq!(json["genre"], "Drama");
}

#[tokio::test]
async fn patch_null_on_required_field_is_rejected() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::PATCH, "/api/movies/m4", Some(json!({ "title": null }))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["message"].as_str().unwrap().contains("title"));

    let unchanged = send(&app, Method::GET, "/api/movies/m4", None).await;
    assert_eq!(unchanged.json()["title"], "Tenet");
}

#[tokio::test]
async fn put_replaces_whole_movie() {
    let app = build_router(dec!(1), catalogue());
    let response = send(
        &app,
        Method::PUT,
        "/api/movies/m5",
        Some(json!({ "title": "Memento (Remastered)" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["id"], "m5");
    assert_eq!(json["genre"], "");
    assert_eq!(json["rating"], 0.0);
}

#[tokio::test]
async fn put_on_missing_movie_is_404() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::PUT, "/api/movies/nope", Some(json!({ "title": "X" }))).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_movie_is_404_and_changes_nothing() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::DELETE, "/api/movies/does-not-exist", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], 404);

    let listing = send(&app, Method::GET, "/api/movies?pageSize=50", None).await;
    assert_eq!(listing.json()["pagination"]["total_hits"], 5);
}

#[tokio::test]
async fn delete_existing_movie_is_204() {
    let app = build_router(dec!(1), catalogue());
    let response = send(&app, Method::DELETE, "/api/movies/m1", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = send(&app, Method::GET, "/api/movies/m1", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movie_routes_are_501_without_an_index() {
    let app = build_bare_router();
    let response = send(&app, Method::GET, "/api/movies", None).await;

    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(response.json()["code"], 501);
}
