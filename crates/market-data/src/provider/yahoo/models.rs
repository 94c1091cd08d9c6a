//! Yahoo Finance chart API response models.
//!
//! Only the fields needed to read the latest regular market price are
//! modelled; everything else in the payload is ignored.

use serde::Deserialize;

/// Top-level response of `/v8/finance/chart/{symbol}`
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container. Yahoo sets `result` to null and fills `error` when the
/// symbol is unknown.
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: YahooChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub regular_market_price: Option<f64>,
    // Note: currency, symbol and timestamps exist but are not used
}
