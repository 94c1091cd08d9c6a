//! FX (Foreign Exchange) module - conversion model, service, and traits.

mod fx_model;
mod fx_service;
mod fx_traits;

pub use fx_model::{parse_amount, Conversion};
pub use fx_service::ConversionService;
pub use fx_traits::ConversionServiceTrait;
