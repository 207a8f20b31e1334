use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::try_join_all;
use log::debug;

use coinboard_market_data::{
    AssetSymbol, MarketDataError, PriceProvider, QuoteBatch, ResolverChain, SymbolAliases,
};

/// Fetches a USD price for every requested symbol.
///
/// The result is all-or-nothing: when any single lookup fails the whole
/// call fails and no partial batch is returned. Implementations do not
/// retry.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    async fn fetch_all(&self, symbols: &[AssetSymbol]) -> Result<QuoteBatch, MarketDataError>;
}

/// [`RateFetcher`] backed by a [`PriceProvider`].
///
/// Each symbol is mapped to the ticker to query through the resolver
/// chain, so aliasing rules live in configuration rather than here.
pub struct MarketRateFetcher {
    provider: Arc<dyn PriceProvider>,
    resolver: ResolverChain,
}

impl MarketRateFetcher {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self::with_resolver(provider, ResolverChain::new())
    }

    pub fn with_aliases(provider: Arc<dyn PriceProvider>, aliases: SymbolAliases) -> Self {
        Self::with_resolver(provider, ResolverChain::with_aliases(aliases))
    }

    pub fn with_resolver(provider: Arc<dyn PriceProvider>, resolver: ResolverChain) -> Self {
        Self { provider, resolver }
    }
}

#[async_trait]
impl RateFetcher for MarketRateFetcher {
    async fn fetch_all(&self, symbols: &[AssetSymbol]) -> Result<QuoteBatch, MarketDataError> {
        let lookups = symbols.iter().map(|&symbol| {
            let resolved = self.resolver.resolve(symbol);
            async move {
                debug!(
                    "Fetching {} as {} ({:?}) from {}",
                    symbol,
                    resolved.symbol,
                    resolved.source,
                    self.provider.id()
                );
                let price = self.provider.get_latest_price(&resolved.symbol).await?;
                Ok::<_, MarketDataError>((symbol, price))
            }
        });

        // Fails fast on the first error; remaining lookups are dropped.
        let prices = try_join_all(lookups).await?;

        Ok(QuoteBatch::assemble(Utc::now(), prices))
    }
}
