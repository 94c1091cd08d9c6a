//! Yahoo Finance rate provider.
//!
//! Reads the latest regular market price of an FX symbol (e.g. `EURUSD=X`)
//! from the public chart endpoint.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{CurrencyPair, Rate};
use crate::provider::RateFetcher;

use models::YahooChartResponse;

/// Default chart endpoint, without the trailing symbol segment.
pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const PROVIDER_ID: &str = "YAHOO";
const SOURCE: &str = "yahoo-finance";
const USER_AGENT: &str = "currency-converter-agent/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Yahoo Finance FX rate provider.
pub struct YahooProvider {
    client: reqwest::Client,
    chart_url: String,
}

impl YahooProvider {
    /// Create a provider pointing at the public Yahoo chart API.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_chart_url(YAHOO_CHART_URL)
    }

    /// Create a provider pointing at a custom chart endpoint.
    pub fn with_chart_url(chart_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                MarketDataError::fetch_failed("", format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            chart_url: chart_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn chart_endpoint(&self, symbol: &str) -> String {
        format!(
            "{}/{}?range=1d&interval=1m",
            self.chart_url,
            encode(symbol)
        )
    }
}

#[async_trait]
impl RateFetcher for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self, pair: &CurrencyPair) -> Result<Rate, MarketDataError> {
        let symbol = pair.yahoo_symbol();
        let url = self.chart_endpoint(&symbol);
        debug!("Fetching {} rate from {}", pair, url);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| MarketDataError::fetch_failed(&symbol, e.to_string()))?;

        if response.status() != StatusCode::OK {
            warn!("Yahoo chart returned {} for {}", response.status(), symbol);
            return Err(MarketDataError::fetch_failed(
                &symbol,
                format!("unexpected status code {}", response.status().as_u16()),
            ));
        }

        let payload: YahooChartResponse = response.json().await.map_err(|e| {
            MarketDataError::fetch_failed(&symbol, format!("failed to decode chart: {}", e))
        })?;

        let price = price_from_chart(&symbol, payload)?;

        Ok(Rate {
            pair: pair.clone(),
            price,
            source: SOURCE.to_string(),
        })
    }
}

/// Extract the latest market price from a decoded chart payload.
///
/// A missing or zero price is unusable data, never a valid rate of zero.
fn price_from_chart(symbol: &str, payload: YahooChartResponse) -> Result<Decimal, MarketDataError> {
    if payload.chart.error.is_some() {
        return Err(MarketDataError::fetch_failed(
            symbol,
            "chart api returned an error",
        ));
    }

    let result = payload
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketDataError::fetch_failed(symbol, "chart api returned no results"))?;

    let raw = result
        .meta
        .regular_market_price
        .ok_or_else(|| MarketDataError::fetch_failed(symbol, "missing regular market price"))?;

    if raw == 0.0 {
        return Err(MarketDataError::fetch_failed(
            symbol,
            "received zero price from api",
        ));
    }

    Decimal::from_f64_retain(raw).ok_or_else(|| {
        MarketDataError::fetch_failed(symbol, format!("unrepresentable price {}", raw))
    })
}
