use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn healthz() -> Json<&'static str> {
    Json("ok")
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/health", get(health))
}

/// Top-level liveness route for clients that do not use the `/api` prefix.
pub fn root_router() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(healthz))
}
