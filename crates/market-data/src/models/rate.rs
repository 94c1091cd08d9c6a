use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A base/target currency pair, normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub target: String,
}

impl CurrencyPair {
    pub fn new(base: &str, target: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            target: target.trim().to_uppercase(),
        }
    }

    /// Yahoo Finance FX symbol, e.g. `USDIDR=X`.
    pub fn yahoo_symbol(&self) -> String {
        format!("{}{}=X", self.base, self.target)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.target)
    }
}

/// An exchange rate as reported by a provider.
///
/// `price` is the amount of `pair.target` one unit of `pair.base` buys.
/// Providers never hand out a zero price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub pair: CurrencyPair,
    pub price: Decimal,
    pub source: String,
}
