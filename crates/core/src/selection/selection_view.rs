use std::collections::BTreeSet;

use chrono_tz::Tz;
use log::debug;

use coinboard_market_data::AssetSymbol;

use super::{AssetCatalog, DisplayRecord, DisplayState, Selection};
use crate::portfolio::{Portfolio, PortfolioSubscriber};

/// Owns the current selection and its derived display record.
///
/// Whichever of [`select`](Self::select) or a portfolio notification is
/// processed last determines what is shown; neither has priority.
pub struct SelectionView {
    catalog: AssetCatalog,
    label_tz: Tz,
    selection: Option<Selection>,
    state: DisplayState,
    display: Option<DisplayRecord>,
    revision: u64,
}

impl SelectionView {
    pub fn new(catalog: AssetCatalog, label_tz: Tz) -> Self {
        Self {
            catalog,
            label_tz,
            selection: None,
            state: DisplayState::Uninitialized,
            display: None,
            revision: 0,
        }
    }

    /// Replace the selection and recompute against `portfolio` immediately.
    pub fn select(&mut self, symbol: AssetSymbol, portfolio: &Portfolio) -> DisplayRecord {
        let selection = self.catalog.selection(symbol);
        let record = DisplayRecord::derive(&selection, portfolio, self.label_tz);
        self.selection = Some(selection);
        self.publish(record, portfolio)
    }

    /// `None` until the first selection.
    pub fn current_display(&self) -> Option<DisplayRecord> {
        self.display.clone()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Incremented on every recompute; lets callers detect redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn publish(&mut self, record: DisplayRecord, portfolio: &Portfolio) -> DisplayRecord {
        self.state = match portfolio.get(record.symbol) {
            Some(quote) => DisplayState::Populated(quote.clone()),
            None => DisplayState::Placeholder,
        };
        self.revision += 1;
        debug!(
            "Display revision {}: {} {}",
            self.revision, record.title, record.price
        );

        self.display = Some(record.clone());
        record
    }
}

impl PortfolioSubscriber for SelectionView {
    fn on_portfolio_updated(&mut self, portfolio: &Portfolio, updated: &BTreeSet<AssetSymbol>) {
        let Some(selection) = self.selection.as_ref() else {
            return;
        };
        if !updated.contains(&selection.symbol) {
            return;
        }

        let record = DisplayRecord::derive(selection, portfolio, self.label_tz);
        self.publish(record, portfolio);
    }
}
