//! Portfolio module - the authoritative latest-quote-per-symbol snapshot.
//!
//! [`PortfolioStore`] is the only writer of [`Portfolio`]. Every successful
//! refresh installs a brand-new snapshot behind an `Arc`, so readers holding
//! an older one never see it change underneath them.

mod portfolio_model;
mod portfolio_store;
mod portfolio_traits;

pub use portfolio_model::*;
pub use portfolio_store::*;
pub use portfolio_traits::*;
