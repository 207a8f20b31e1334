use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use coinboard_market_data::{AssetSymbol, PriceQuote, QuoteBatch};

/// Immutable snapshot of the latest quote for each symbol.
///
/// A symbol is present only once a fetch for it has succeeded. A missing
/// entry means "never fetched", which is distinct from a zero price.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    quotes: BTreeMap<AssetSymbol, PriceQuote>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl Portfolio {
    /// A portfolio with no quotes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: AssetSymbol) -> Option<&PriceQuote> {
        self.quotes.get(&symbol)
    }

    pub fn contains(&self, symbol: AssetSymbol) -> bool {
        self.quotes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes in canonical symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceQuote> {
        self.quotes.values()
    }

    /// Assembly time of the last batch that was applied.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Returns a new snapshot with every quote in `batch` replacing the
    /// entry for its symbol. Symbols outside the batch carry over as-is.
    pub fn with_batch(&self, batch: &QuoteBatch) -> Portfolio {
        let mut quotes = self.quotes.clone();
        for quote in &batch.quotes {
            quotes.insert(quote.symbol, quote.clone());
        }
        Portfolio {
            quotes,
            last_refreshed: Some(batch.observed_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::empty();
        assert!(portfolio.is_empty());
        assert!(portfolio.last_refreshed().is_none());
        assert!(!portfolio.contains(AssetSymbol::Btc));
    }

    #[test]
    fn test_with_batch_replaces_and_keeps_others() {
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
        let t2 = t1 + Duration::seconds(60);

        let first = Portfolio::empty().with_batch(&QuoteBatch::assemble(
            t1,
            [
                (AssetSymbol::Btc, dec!(100)),
                (AssetSymbol::Eth, dec!(10)),
            ],
        ));
        let second = first.with_batch(&QuoteBatch::assemble(t2, [(AssetSymbol::Btc, dec!(105))]));

        let btc = second.get(AssetSymbol::Btc).unwrap();
        assert_eq!(btc.price_usd, dec!(105));
        assert_eq!(btc.observed_at, t2);
        assert_eq!(second.get(AssetSymbol::Eth).unwrap().observed_at, t1);
        assert_eq!(second.last_refreshed(), Some(t2));

        // The source snapshot is untouched.
        assert_eq!(first.get(AssetSymbol::Btc).unwrap().price_usd, dec!(100));
    }

    #[test]
    fn test_zero_price_is_present() {
        let portfolio = Portfolio::empty()
            .with_batch(&QuoteBatch::assemble(Utc::now(), [(AssetSymbol::Usdc, Decimal::ZERO)]));
        assert!(portfolio.contains(AssetSymbol::Usdc));
        assert_eq!(portfolio.get(AssetSymbol::Usdc).unwrap().price_usd, Decimal::ZERO);
    }

    #[test]
    fn test_iter_is_in_symbol_order() {
        let portfolio = Portfolio::empty().with_batch(&QuoteBatch::assemble(
            Utc::now(),
            [
                (AssetSymbol::Usdc, dec!(1)),
                (AssetSymbol::Btc, dec!(65000)),
            ],
        ));
        let symbols: Vec<_> = portfolio.iter().map(|q| q.symbol).collect();
        assert_eq!(symbols, vec![AssetSymbol::Btc, AssetSymbol::Usdc]);
    }
}
