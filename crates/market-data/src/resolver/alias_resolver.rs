//! Alias resolver - resolves from the configured alias table.
//!
//! This is the first resolver in the chain. Upstream may not list a
//! symbol under its own ticker, in which case the table names the
//! ticker to query instead.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::MarketDataError;
use crate::models::{AssetSymbol, ProviderSymbol};

use super::traits::{ResolutionSource, ResolvedSymbol, Resolver};

/// Table of `symbol -> upstream ticker` rewrites.
///
/// Parses from a comma separated list of `SYMBOL=ALIAS` pairs, e.g.
/// `"USDC=USDT, ETH=WETH"`. An empty string is an empty table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolAliases {
    entries: HashMap<AssetSymbol, ProviderSymbol>,
}

impl SymbolAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the alias for a symbol.
    pub fn insert(&mut self, symbol: AssetSymbol, alias: impl Into<ProviderSymbol>) {
        self.entries.insert(symbol, alias.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, symbol: AssetSymbol, alias: impl Into<ProviderSymbol>) -> Self {
        self.insert(symbol, alias);
        self
    }

    pub fn get(&self, symbol: AssetSymbol) -> Option<&ProviderSymbol> {
        self.entries.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for SymbolAliases {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut aliases = SymbolAliases::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (symbol, alias) = pair.split_once('=').ok_or_else(|| {
                MarketDataError::ValidationFailed {
                    message: format!("Alias entry '{}' is not SYMBOL=ALIAS", pair),
                }
            })?;
            let symbol: AssetSymbol = symbol.parse()?;
            let alias = alias.trim();
            if alias.is_empty() {
                return Err(MarketDataError::ValidationFailed {
                    message: format!("Alias entry '{}' has an empty alias", pair),
                });
            }
            aliases.insert(symbol, Arc::from(alias.to_ascii_uppercase()));
        }
        Ok(aliases)
    }
}

/// Resolves symbols from a [`SymbolAliases`] table.
pub struct AliasResolver {
    aliases: SymbolAliases,
}

impl AliasResolver {
    pub fn new(aliases: SymbolAliases) -> Self {
        Self { aliases }
    }
}

impl Resolver for AliasResolver {
    fn resolve(&self, symbol: AssetSymbol) -> Option<ResolvedSymbol> {
        let alias = self.aliases.get(symbol)?;
        Some(ResolvedSymbol {
            symbol: alias.clone(),
            source: ResolutionSource::Alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let aliases: SymbolAliases = "usdc=usdt, ETH = WETH".parse().unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.get(AssetSymbol::Usdc).map(|s| &**s), Some("USDT"));
        assert_eq!(aliases.get(AssetSymbol::Eth).map(|s| &**s), Some("WETH"));
        assert!(aliases.get(AssetSymbol::Btc).is_none());
    }

    #[test]
    fn test_parse_empty_string() {
        let aliases: SymbolAliases = "".parse().unwrap();
        assert!(aliases.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = "USDC".parse::<SymbolAliases>().unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "DOGE=XDG".parse::<SymbolAliases>().unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[test]
    fn test_parse_rejects_empty_alias() {
        let err = "BTC=".parse::<SymbolAliases>().unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }

    #[test]
    fn test_resolver_only_answers_for_aliased_symbols() {
        let resolver = AliasResolver::new(SymbolAliases::new().with(AssetSymbol::Usdc, "USDT"));

        let resolved = resolver.resolve(AssetSymbol::Usdc).unwrap();
        assert_eq!(&*resolved.symbol, "USDT");
        assert_eq!(resolved.source, ResolutionSource::Alias);

        assert!(resolver.resolve(AssetSymbol::Btc).is_none());
    }
}
