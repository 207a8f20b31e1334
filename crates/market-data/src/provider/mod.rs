//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` and `NewsProvider` traits
//! - The CryptoCompare implementation of both
//!
//! Providers receive pre-resolved `ProviderSymbol`s. The mapping from
//! canonical `AssetSymbol` to upstream ticker happens in the resolver
//! module, not in the providers themselves.

mod traits;

pub mod cryptocompare;

// Re-exports
pub use traits::{NewsProvider, PriceProvider};
