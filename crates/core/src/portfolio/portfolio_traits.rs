//! Observer trait for portfolio updates.

use std::collections::BTreeSet;

use coinboard_market_data::AssetSymbol;

use super::Portfolio;

/// Receives every newly installed portfolio snapshot.
///
/// Called synchronously by [`PortfolioStore`](super::PortfolioStore) after
/// the snapshot is replaced and before the refresh returns. Implementations
/// must not block.
pub trait PortfolioSubscriber {
    /// `updated` is the set of symbols the applied batch covered.
    fn on_portfolio_updated(&mut self, portfolio: &Portfolio, updated: &BTreeSet<AssetSymbol>);
}

/// Subscriber that ignores every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSubscriber;

impl PortfolioSubscriber for NoOpSubscriber {
    fn on_portfolio_updated(&mut self, _portfolio: &Portfolio, _updated: &BTreeSet<AssetSymbol>) {}
}
