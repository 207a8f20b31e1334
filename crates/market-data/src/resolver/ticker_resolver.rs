//! Ticker resolver - the canonical ticker, unchanged.

use std::sync::Arc;

use crate::models::AssetSymbol;

use super::traits::{ResolutionSource, ResolvedSymbol, Resolver};

/// Resolves every symbol to its own ticker. Always last in the chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickerResolver;

impl TickerResolver {
    pub fn ticker(&self, symbol: AssetSymbol) -> ResolvedSymbol {
        ResolvedSymbol {
            symbol: Arc::from(symbol.as_str()),
            source: ResolutionSource::Ticker,
        }
    }
}

impl Resolver for TickerResolver {
    fn resolve(&self, symbol: AssetSymbol) -> Option<ResolvedSymbol> {
        Some(self.ticker(symbol))
    }
}
