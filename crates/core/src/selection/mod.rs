//! Selection module - which asset is on screen and what it shows.
//!
//! [`SelectionView`] owns the current [`Selection`] and derives a
//! [`DisplayRecord`] from it and the latest portfolio snapshot. The record is
//! never stored independently of its inputs; it is recomputed whenever the
//! selection changes or a refresh covers the selected symbol.

mod asset_catalog;
mod display_model;
mod selection_view;

pub use asset_catalog::*;
pub use display_model::*;
pub use selection_view::*;
