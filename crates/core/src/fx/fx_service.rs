use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use trellis_market_data::{CurrencyPair, RateFetcher};

use super::fx_model::{amount_out_of_range, Conversion};
use super::fx_traits::ConversionServiceTrait;
use crate::errors::{Result, ValidationError};

#[derive(Clone)]
pub struct ConversionService {
    fetcher: Arc<dyn RateFetcher>,
}

impl ConversionService {
    pub fn new(fetcher: Arc<dyn RateFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert(&self, base: &str, target: &str, amount: Decimal) -> Result<Conversion> {
        let pair = CurrencyPair::new(base, target);
        if pair.base.is_empty() || pair.target.is_empty() {
            return Err(ValidationError::InvalidInput(
                "base and target query parameters are required".to_string(),
            )
            .into());
        }

        let rate = self.fetcher.fetch(&pair).await.map_err(|e| {
            log::error!("Failed to fetch rate for {} via {}: {}", pair, self.fetcher.id(), e);
            e
        })?;

        let converted = rate
            .price
            .checked_mul(amount)
            .ok_or_else(amount_out_of_range)?;

        Ok(Conversion {
            converted,
            base: pair.base,
            target: pair.target,
            amount,
            rate: rate.price,
            source: rate.source,
        })
    }
}
