use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use trellis_core::fx::{parse_amount, Conversion};
use trellis_core::Error as CoreError;

use crate::{
    error::{ApiError, ApiQuery, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct ConvertParams {
    base: Option<String>,
    target: Option<String>,
    amount: Option<String>,
}

async fn convert(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ConvertParams>,
) -> ApiResult<Json<Conversion>> {
    let base = params.base.unwrap_or_default();
    let target = params.target.unwrap_or_default();
    if base.trim().is_empty() || target.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "base and target query parameters are required".to_string(),
        ));
    }
    let amount = parse_amount(params.amount.as_deref()).map_err(CoreError::from)?;
    let conversion = state
        .conversion_service
        .convert(&base, &target, amount)
        .await?;
    Ok(Json(conversion))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", get(convert))
}
