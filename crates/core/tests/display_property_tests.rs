//! Property-based integration tests for portfolio/selection consistency.
//!
//! Random interleavings of selections and refresh outcomes are applied in
//! order, the way the engine worker applies them, and the display is
//! checked against an independent model after every step.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use coinboard_core::events::NoOpEventSink;
use coinboard_core::{
    AssetCatalog, DisplayPrice, DisplayRecord, DisplayState, PortfolioStore, SelectionView,
};
use coinboard_market_data::{AssetSymbol, MarketDataError, QuoteBatch};

// =============================================================================
// Generators
// =============================================================================

#[derive(Clone, Debug)]
enum Event {
    Select(AssetSymbol),
    RefreshOk(Vec<(AssetSymbol, u32)>),
    RefreshFailed,
}

fn arb_symbol() -> impl Strategy<Value = AssetSymbol> {
    prop_oneof![
        Just(AssetSymbol::Btc),
        Just(AssetSymbol::Eth),
        Just(AssetSymbol::Usdc),
    ]
}

/// A non-empty batch with at most one price per symbol.
fn arb_prices() -> impl Strategy<Value = Vec<(AssetSymbol, u32)>> {
    proptest::collection::btree_map(arb_symbol(), 0u32..100_000, 1..=3)
        .prop_map(|prices| prices.into_iter().collect())
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => arb_symbol().prop_map(Event::Select),
        3 => arb_prices().prop_map(Event::RefreshOk),
        1 => Just(Event::RefreshFailed),
    ]
}

fn at(step: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap() + Duration::minutes(step as i64)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The display always matches a fresh projection of the current
    /// selection onto the current snapshot, and the selected price is the
    /// last successfully fetched one.
    #[test]
    fn prop_display_tracks_last_processed_event(
        events in proptest::collection::vec(arb_event(), 1..40)
    ) {
        let mut store = PortfolioStore::new(AssetSymbol::ALL.to_vec(), Arc::new(NoOpEventSink));
        let mut view = SelectionView::new(AssetCatalog::default(), chrono_tz::UTC);
        let mut last_good: BTreeMap<AssetSymbol, Decimal> = BTreeMap::new();
        let mut selected: Option<AssetSymbol> = None;

        for (step, event) in events.into_iter().enumerate() {
            let before = store.current();
            match event {
                Event::Select(symbol) => {
                    let record = view.select(symbol, &store.current());
                    prop_assert_eq!(Some(record), view.current_display());
                    selected = Some(symbol);
                }
                Event::RefreshOk(prices) => {
                    let batch = QuoteBatch::assemble(
                        at(step),
                        prices.iter().map(|&(s, p)| (s, Decimal::from(p))),
                    );
                    prop_assert!(store.apply(Ok(batch), &mut view));
                    for (symbol, price) in prices {
                        last_good.insert(symbol, Decimal::from(price));
                    }
                }
                Event::RefreshFailed => {
                    let failure = MarketDataError::Timeout { provider: "TEST".to_string() };
                    prop_assert!(!store.apply(Err(failure), &mut view));
                    prop_assert!(Arc::ptr_eq(&before, &store.current()));
                }
            }

            let Some(symbol) = selected else {
                prop_assert_eq!(view.state(), &DisplayState::Uninitialized);
                continue;
            };

            let shown = view.current_display().unwrap();
            let selection = AssetCatalog::default().selection(symbol);
            prop_assert_eq!(&shown, &DisplayRecord::derive(&selection, &store.current(), chrono_tz::UTC));

            match last_good.get(&symbol) {
                Some(price) => prop_assert_eq!(shown.price, DisplayPrice::Available(*price)),
                None => prop_assert!(shown.is_placeholder()),
            }
        }
    }

    /// Processing [select, refresh] and [refresh, select] for the same
    /// symbol ends on the same record.
    #[test]
    fn prop_select_refresh_order_is_irrelevant_for_covered_symbol(
        symbol in arb_symbol(),
        prices in arb_prices(),
    ) {
        let batch = QuoteBatch::assemble(
            at(0),
            prices.iter().map(|&(s, p)| (s, Decimal::from(p))),
        );

        let mut store_a = PortfolioStore::new(AssetSymbol::ALL.to_vec(), Arc::new(NoOpEventSink));
        let mut view_a = SelectionView::new(AssetCatalog::default(), chrono_tz::UTC);
        view_a.select(symbol, &store_a.current());
        store_a.apply(Ok(batch.clone()), &mut view_a);

        let mut store_b = PortfolioStore::new(AssetSymbol::ALL.to_vec(), Arc::new(NoOpEventSink));
        let mut view_b = SelectionView::new(AssetCatalog::default(), chrono_tz::UTC);
        store_b.apply(Ok(batch), &mut view_b);
        view_b.select(symbol, &store_b.current());

        prop_assert_eq!(view_a.current_display(), view_b.current_display());
    }
}
