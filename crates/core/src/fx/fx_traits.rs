use async_trait::async_trait;
use rust_decimal::Decimal;

use super::fx_model::Conversion;
use crate::errors::Result;

/// Trait defining the contract for currency conversion.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    /// Convert `amount` units of `base` into `target` at the latest rate.
    async fn convert(&self, base: &str, target: &str, amount: Decimal) -> Result<Conversion>;
}
