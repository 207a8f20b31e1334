//! Symbol resolution for market data providers.
//!
//! Converts a canonical [`AssetSymbol`](crate::AssetSymbol) into the ticker a
//! provider is queried with. Aliasing is table-driven so new rules never
//! touch fetch logic.
//!
//! # Resolution Precedence
//!
//! 1. **If the alias table has an entry for the symbol** -> use it
//! 2. **Else** -> use the symbol's own ticker
//!
//! # Example
//!
//! ```
//! use coinboard_market_data::{AssetSymbol, ResolutionSource, ResolverChain, SymbolAliases};
//!
//! let aliases: SymbolAliases = "USDC=USDT".parse().unwrap();
//! let chain = ResolverChain::with_aliases(aliases);
//!
//! let resolved = chain.resolve(AssetSymbol::Usdc);
//! assert_eq!(&*resolved.symbol, "USDT");
//! assert_eq!(resolved.source, ResolutionSource::Alias);
//!
//! let resolved = chain.resolve(AssetSymbol::Btc);
//! assert_eq!(&*resolved.symbol, "BTC");
//! assert_eq!(resolved.source, ResolutionSource::Ticker);
//! ```

mod alias_resolver;
mod chain;
mod ticker_resolver;
mod traits;

pub use alias_resolver::{AliasResolver, SymbolAliases};
pub use chain::ResolverChain;
pub use ticker_resolver::TickerResolver;
pub use traits::{ResolutionSource, ResolvedSymbol, Resolver};
