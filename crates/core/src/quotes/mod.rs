//! Quote fetching module.
//!
//! [`RateFetcher`] is the leaf of the engine: one call fetches a USD price
//! for every tracked symbol and either returns the whole batch or fails.
//!
//! ```text
//! PortfolioStore → RateFetcher → ResolverChain → PriceProvider (market-data crate)
//! ```
//!
//! Tests and hosts can substitute any `RateFetcher`; [`MarketRateFetcher`]
//! is the implementation backed by a market-data provider.

mod fetcher;

pub use fetcher::{MarketRateFetcher, RateFetcher};
