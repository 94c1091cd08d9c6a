use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use trellis_market_data::YAHOO_CHART_URL;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Elasticsearch connection settings. Present only when an address is set.
#[derive(Debug, Clone)]
pub struct ElasticSettings {
    pub address: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub yahoo_chart_url: String,
    /// Movie search is disabled when unset.
    pub elastic: Option<ElasticSettings>,
    /// Travel blog is disabled when unset.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr = match non_empty_var("TRELLIS_LISTEN_ADDR") {
            Some(addr) => addr,
            None => {
                let port = non_empty_var("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
                format!("0.0.0.0:{}", port)
            }
        };
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen_addr))?;
        let timeout_ms: u64 = non_empty_var("TRELLIS_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let yahoo_chart_url =
            non_empty_var("YAHOO_CHART_URL").unwrap_or_else(|| YAHOO_CHART_URL.to_string());
        let elastic = non_empty_var("ELASTICSEARCH_ADDRESS").map(|address| ElasticSettings {
            address,
            username: non_empty_var("ELASTICSEARCH_USERNAME"),
            password: non_empty_var("ELASTICSEARCH_PASSWORD"),
        });
        let database_url = non_empty_var("DATABASE_URL");
        Ok(Self {
            listen_addr,
            request_timeout: Duration::from_millis(timeout_ms),
            yahoo_chart_url,
            elastic,
            database_url,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
