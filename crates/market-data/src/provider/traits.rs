//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CurrencyPair, Rate};

/// Trait for exchange rate providers.
///
/// The conversion service holds one of these behind an `Arc<dyn RateFetcher>`
/// so the provider can be replaced, for example by a fixed-rate fake in tests.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use rust_decimal_macros::dec;
/// use trellis_market_data::{CurrencyPair, MarketDataError, Rate, RateFetcher};
///
/// struct FixedRate;
///
/// #[async_trait]
/// impl RateFetcher for FixedRate {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch(&self, pair: &CurrencyPair) -> Result<Rate, MarketDataError> {
///         Ok(Rate { pair: pair.clone(), price: dec!(1.5), source: "fixed".into() })
///     }
/// }
/// ```
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest rate for a currency pair.
    ///
    /// # Returns
    ///
    /// A rate with a strictly non-zero price, or
    /// [`MarketDataError::FetchFailed`] for any transport, decode or data
    /// problem.
    async fn fetch(&self, pair: &CurrencyPair) -> Result<Rate, MarketDataError>;
}
