//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (ProviderSymbol)
//! - `symbol` - Tracked asset identity (AssetSymbol)
//! - `quote` - Price observations (PriceQuote, QuoteBatch)
//! - `article` - News headlines (Article)

mod article;
mod quote;
mod symbol;
mod types;

pub use article::Article;
pub use quote::{PriceQuote, QuoteBatch};
pub use symbol::AssetSymbol;
pub use types::ProviderSymbol;
