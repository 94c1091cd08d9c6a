//! Trellis Market Data Crate
//!
//! Fetches foreign exchange rates for the currency converter.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  CurrencyPair    | --> |   RateFetcher    | --> |      Rate        |
//! +------------------+     +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  YahooProvider   |  (chart API)
//!                          +------------------+
//! ```
//!
//! Callers depend on the [`RateFetcher`] trait only, so tests and other
//! providers can be swapped in without touching the conversion logic.
//! Every failure, whatever its cause, is reported as
//! [`MarketDataError::FetchFailed`].

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CurrencyPair, Rate};
pub use provider::yahoo::{YahooProvider, YAHOO_CHART_URL};
pub use provider::RateFetcher;
