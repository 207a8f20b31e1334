//! Coinboard Core - polling and state synchronization for a live price display.
//!
//! The engine keeps an authoritative [`Portfolio`] of the latest USD quote per
//! symbol, refreshed on a fixed cadence through a [`RateFetcher`], and derives
//! the [`DisplayRecord`] for whichever asset is selected. Network access lives
//! in the `coinboard-market-data` crate; this crate only orchestrates.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod news;
pub mod portfolio;
pub mod quotes;
pub mod selection;
pub mod utils;

pub use engine::{EngineConfig, EngineHandle};
pub use news::NewsService;
pub use portfolio::{Portfolio, PortfolioStore, PortfolioSubscriber};
pub use quotes::{MarketRateFetcher, RateFetcher};
pub use selection::{
    AssetCatalog, DisplayPrice, DisplayRecord, DisplayState, IconRef, Selection, SelectionView,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
