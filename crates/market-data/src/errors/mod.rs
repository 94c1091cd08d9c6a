//! Error type for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a rate.
///
/// Transport failures, unexpected status codes, undecodable payloads and
/// unusable prices all collapse into [`MarketDataError::FetchFailed`]. The
/// `reason` is meant for logs; callers should not branch on it.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Rate fetch failed for {symbol}: {reason}")]
    FetchFailed {
        /// Provider symbol that was requested (e.g. `USDIDR=X`)
        symbol: String,
        /// Human readable failure detail
        reason: String,
    },
}

impl MarketDataError {
    pub fn fetch_failed(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Provider symbol the failed request was made for.
    pub fn symbol(&self) -> &str {
        match self {
            Self::FetchFailed { symbol, .. } => symbol,
        }
    }
}
