//! Resolver chain - composite resolver that tries resolvers in order.
//!
//! The resolver chain is the main entry point for symbol resolution. It
//! combines multiple resolvers and tries them in order until one succeeds.

use crate::models::AssetSymbol;

use super::alias_resolver::{AliasResolver, SymbolAliases};
use super::ticker_resolver::TickerResolver;
use super::traits::{ResolvedSymbol, Resolver};

/// Composite resolver that tries multiple resolvers in order.
///
/// The resolution order is:
/// 1. Alias table
/// 2. Any resolvers added with [`add_resolver`](Self::add_resolver)
/// 3. The canonical ticker (always last, always answers)
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
    ticker_resolver: TickerResolver,
}

impl ResolverChain {
    /// Create a chain with an empty alias table.
    pub fn new() -> Self {
        Self::with_aliases(SymbolAliases::new())
    }

    /// Create a chain backed by the given alias table.
    pub fn with_aliases(aliases: SymbolAliases) -> Self {
        Self {
            resolvers: vec![Box::new(AliasResolver::new(aliases))],
            ticker_resolver: TickerResolver,
        }
    }

    /// Add a custom resolver to the chain.
    ///
    /// The resolver is added before the ticker resolver (which is always last).
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Resolve the upstream symbol to query.
    pub fn resolve(&self, symbol: AssetSymbol) -> ResolvedSymbol {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(symbol))
            .unwrap_or_else(|| self.ticker_resolver.ticker(symbol))
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::resolver::ResolutionSource;

    struct FixedResolver(&'static str);

    impl Resolver for FixedResolver {
        fn resolve(&self, _symbol: AssetSymbol) -> Option<ResolvedSymbol> {
            Some(ResolvedSymbol {
                symbol: Arc::from(self.0),
                source: ResolutionSource::Alias,
            })
        }
    }

    #[test]
    fn test_default_chain_uses_ticker() {
        let chain = ResolverChain::new();
        for symbol in AssetSymbol::ALL {
            let resolved = chain.resolve(symbol);
            assert_eq!(&*resolved.symbol, symbol.as_str());
            assert_eq!(resolved.source, ResolutionSource::Ticker);
        }
    }

    #[test]
    fn test_alias_wins_over_ticker() {
        let chain =
            ResolverChain::with_aliases(SymbolAliases::new().with(AssetSymbol::Usdc, "USDT"));

        assert_eq!(&*chain.resolve(AssetSymbol::Usdc).symbol, "USDT");
        assert_eq!(&*chain.resolve(AssetSymbol::Eth).symbol, "ETH");
    }

    #[test]
    fn test_alias_table_checked_before_custom_resolvers() {
        let mut chain =
            ResolverChain::with_aliases(SymbolAliases::new().with(AssetSymbol::Btc, "XBT"));
        chain.add_resolver(Box::new(FixedResolver("FAKE")));

        assert_eq!(&*chain.resolve(AssetSymbol::Btc).symbol, "XBT");
        assert_eq!(&*chain.resolve(AssetSymbol::Eth).symbol, "FAKE");
    }
}
