//! Market data provider trait definitions.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{Article, ProviderSymbol};

/// Trait for spot price providers.
///
/// Implement this trait to add support for a new price source. Each call
/// is one independent remote lookup; batching and the all-or-nothing
/// policy live in the caller.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinboard_market_data::{MarketDataError, PriceProvider, ProviderSymbol};
/// use rust_decimal::Decimal;
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PriceProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_price(&self, _symbol: &ProviderSymbol) -> Result<Decimal, MarketDataError> {
///         Ok(Decimal::ONE)
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "CRYPTOCOMPARE".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest USD price for an upstream symbol.
    ///
    /// # Returns
    ///
    /// The price on success, or a `MarketDataError` when the request fails,
    /// the body is unparsable, or the price field is missing.
    async fn get_latest_price(&self, symbol: &ProviderSymbol) -> Result<Decimal, MarketDataError>;
}

/// Trait for news feed providers.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch the latest articles, newest first, untruncated.
    async fn latest_articles(&self) -> Result<Vec<Article>, MarketDataError>;
}
