use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::main_lib::AppState;

mod convert;
mod cors;
mod health;
mod movies;
mod travel;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(convert::router())
        .merge(movies::router())
        .merge(travel::router());

    Router::new()
        .merge(health::root_router())
        .nest("/api", api)
        .with_state(state)
        .layer(middleware::from_fn(cors::cors))
        // Router layers wrap outward, so the id is set before it is propagated.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
