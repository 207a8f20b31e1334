//! Resolution traits for the market data crate.

use crate::models::{AssetSymbol, ProviderSymbol};

/// Resolution result containing the upstream symbol and its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSymbol {
    /// The provider-specific symbol to query.
    pub symbol: ProviderSymbol,
    /// Where this resolution came from.
    pub source: ResolutionSource,
}

/// Indicates how a symbol was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    /// From the configured alias table.
    Alias,
    /// The canonical ticker, unchanged.
    Ticker,
}

/// Individual resolver in the resolution chain.
///
/// Resolvers are tried in order until one returns a result.
/// Returning `None` means this resolver cannot handle the symbol,
/// and the chain should try the next resolver.
pub trait Resolver: Send + Sync {
    fn resolve(&self, symbol: AssetSymbol) -> Option<ResolvedSymbol>;
}
