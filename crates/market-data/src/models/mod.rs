//! Rate request and response types.

mod rate;

pub use rate::{CurrencyPair, Rate};
