use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::symbol::AssetSymbol;

/// A USD price observation for one symbol.
///
/// Quotes are superseded, never merged: a newer quote for the same
/// symbol replaces the old one wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: AssetSymbol,

    /// Spot price in USD. Zero is a legitimate value.
    pub price_usd: Decimal,

    /// When the batch containing this quote was assembled
    pub observed_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn new(symbol: AssetSymbol, price_usd: Decimal, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol,
            price_usd,
            observed_at,
        }
    }
}

/// Result of one successful fetch cycle.
///
/// A batch only exists when every requested symbol resolved; there is no
/// partial batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBatch {
    pub observed_at: DateTime<Utc>,
    pub quotes: Vec<PriceQuote>,
}

impl QuoteBatch {
    /// Assemble a batch, stamping every quote with the same observation time.
    pub fn assemble(
        observed_at: DateTime<Utc>,
        prices: impl IntoIterator<Item = (AssetSymbol, Decimal)>,
    ) -> Self {
        let quotes = prices
            .into_iter()
            .map(|(symbol, price)| PriceQuote::new(symbol, price, observed_at))
            .collect();
        Self {
            observed_at,
            quotes,
        }
    }

    /// Symbols covered by this batch.
    pub fn symbols(&self) -> BTreeSet<AssetSymbol> {
        self.quotes.iter().map(|q| q.symbol).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assemble_stamps_every_quote() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap();
        let batch = QuoteBatch::assemble(
            at,
            [
                (AssetSymbol::Btc, dec!(65000)),
                (AssetSymbol::Eth, dec!(3200)),
            ],
        );

        assert_eq!(batch.len(), 2);
        assert!(batch.quotes.iter().all(|q| q.observed_at == at));
        assert_eq!(
            batch.symbols().into_iter().collect::<Vec<_>>(),
            vec![AssetSymbol::Btc, AssetSymbol::Eth]
        );
    }

    #[test]
    fn test_zero_price_is_kept() {
        let batch = QuoteBatch::assemble(Utc::now(), [(AssetSymbol::Usdc, Decimal::ZERO)]);
        assert_eq!(batch.quotes[0].price_usd, Decimal::ZERO);
    }
}
