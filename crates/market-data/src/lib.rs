//! Coinboard Market Data Crate
//!
//! This crate provides the remote price and news lookups used by the
//! Coinboard display engine.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A closed set of tracked crypto assets (BTC, ETH, USDC)
//! - USD spot prices from CryptoCompare, one request per symbol
//! - Table-driven symbol aliasing for upstream tickers
//! - A best-effort news feed
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   AssetSymbol    |  (canonical identity)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  ResolverChain   |  (alias table, then ticker)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  ProviderSymbol  |  (upstream ticker)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  PriceProvider   |  (CryptoCompare)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |     Decimal      |  (USD price)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AssetSymbol`] - Tracked asset identity
//! - [`PriceQuote`] - A USD price observation
//! - [`QuoteBatch`] - All quotes of one successful fetch cycle
//! - [`Article`] - A news headline
//!
//! # Type Aliases
//!
//! - [`ProviderSymbol`] - Provider-specific symbol string

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{Article, AssetSymbol, ProviderSymbol, PriceQuote, QuoteBatch};

// Re-export resolver types
pub use resolver::{
    AliasResolver, ResolutionSource, ResolvedSymbol, Resolver, ResolverChain, SymbolAliases,
    TickerResolver,
};

// Re-export provider types
pub use provider::cryptocompare::{CryptoCompareNewsProvider, CryptoCompareProvider};
pub use provider::{NewsProvider, PriceProvider};
