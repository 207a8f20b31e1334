//! Core error types for the coinboard engine.
//!
//! Nothing in here is fatal to a running display: fetch failures are
//! absorbed by the portfolio store. These errors surface only when the
//! engine is configured or driven incorrectly.

use thiserror::Error;

use coinboard_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Engine is not running")]
    EngineClosed,
}
