use std::fmt;

use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use coinboard_market_data::{AssetSymbol, PriceQuote};

use super::{IconRef, Selection};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PLACEHOLDER_LABEL, PLACEHOLDER_PRICE};
use crate::portfolio::Portfolio;
use crate::utils::time_utils::update_label;

/// Lifecycle of the display for the current selection.
///
/// A failed refresh never moves the state; only selecting a symbol that
/// has no quote yet produces `Placeholder`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing has been selected yet.
    #[default]
    Uninitialized,
    /// The selected symbol has never been fetched.
    Placeholder,
    /// The selected symbol's latest quote.
    Populated(PriceQuote),
}

/// Price cell of a display record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayPrice {
    Available(Decimal),
    Placeholder,
}

impl fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayPrice::Available(price) => {
                let rounded = price.round_dp_with_strategy(
                    DISPLAY_DECIMAL_PRECISION,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                write!(f, "${:.*}", DISPLAY_DECIMAL_PRECISION as usize, rounded)
            }
            DisplayPrice::Placeholder => f.write_str(PLACEHOLDER_PRICE),
        }
    }
}

/// What the renderer shows for the selected asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub symbol: AssetSymbol,
    pub title: String,
    pub price: DisplayPrice,
    pub last_update_label: String,
    pub icon: IconRef,
}

impl DisplayRecord {
    /// Project a selection onto a portfolio snapshot.
    ///
    /// Pure: the same inputs always give the same record. A symbol with no
    /// quote yields the placeholder, never a price from another symbol.
    pub fn derive(selection: &Selection, portfolio: &Portfolio, tz: Tz) -> Self {
        let (price, last_update_label) = match portfolio.get(selection.symbol) {
            Some(quote) => (
                DisplayPrice::Available(quote.price_usd),
                update_label(quote.observed_at, tz),
            ),
            None => (DisplayPrice::Placeholder, PLACEHOLDER_LABEL.to_string()),
        };

        Self {
            symbol: selection.symbol,
            title: selection.display_title.clone(),
            price,
            last_update_label,
            icon: selection.icon.clone(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.price, DisplayPrice::Placeholder)
    }
}
