use std::sync::Arc;

/// Provider-specific symbol, possibly an alias of the canonical ticker
pub type ProviderSymbol = Arc<str>;
