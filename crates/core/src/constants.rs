/// Seconds between scheduled refreshes
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Number of headlines shown by the news panel
pub const DEFAULT_NEWS_LIMIT: usize = 5;

/// Price text shown while a symbol has never been fetched
pub const PLACEHOLDER_PRICE: &str = "Loading...";

/// Update label shown while a symbol has never been fetched
pub const PLACEHOLDER_LABEL: &str = "Not yet available";

/// Decimal places used when rendering a USD price
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
