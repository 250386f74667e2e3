//! Data layer for HomeScout: listings, the catalog, currency formatting,
//! and configuration.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod logging;
pub mod types;

pub use catalog::Catalog;
pub use config::HomeScoutConfig;
pub use currency::{CurrencyFormat, CurrencyFormatter};
pub use error::{CoreError, Result};
pub use types::*;
