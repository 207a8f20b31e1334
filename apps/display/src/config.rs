use std::time::Duration;

use anyhow::{anyhow, Context};
use chrono_tz::Tz;

use coinboard_core::constants::{DEFAULT_NEWS_LIMIT, DEFAULT_REFRESH_INTERVAL_SECS};
use coinboard_core::EngineConfig;
use coinboard_market_data::provider::cryptocompare::{DEFAULT_NEWS_URL, DEFAULT_PRICE_URL};
use coinboard_market_data::{AssetSymbol, SymbolAliases};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Host configuration, read from `COINBOARD_*` environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub symbols: Vec<AssetSymbol>,
    pub price_url: String,
    pub news_url: String,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub aliases: SymbolAliases,
    pub initial_symbol: AssetSymbol,
    pub news_limit: usize,
    pub timezone: Tz,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let symbols = match var("COINBOARD_SYMBOLS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<AssetSymbol>())
                .collect::<Result<Vec<_>, _>>()
                .context("Invalid COINBOARD_SYMBOLS")?,
            None => AssetSymbol::ALL.to_vec(),
        };

        let refresh_secs = parse_or(var("COINBOARD_REFRESH_SECS"), DEFAULT_REFRESH_INTERVAL_SECS)
            .context("Invalid COINBOARD_REFRESH_SECS")?;
        let timeout_secs = parse_or(
            var("COINBOARD_REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )
        .context("Invalid COINBOARD_REQUEST_TIMEOUT_SECS")?;
        let news_limit = parse_or(var("COINBOARD_NEWS_LIMIT"), DEFAULT_NEWS_LIMIT)
            .context("Invalid COINBOARD_NEWS_LIMIT")?;

        let aliases = match var("COINBOARD_ALIASES") {
            Some(table) => table
                .parse::<SymbolAliases>()
                .context("Invalid COINBOARD_ALIASES")?,
            None => SymbolAliases::new(),
        };

        let initial_symbol = match var("COINBOARD_INITIAL_SYMBOL") {
            Some(symbol) => symbol
                .parse::<AssetSymbol>()
                .context("Invalid COINBOARD_INITIAL_SYMBOL")?,
            None => AssetSymbol::Btc,
        };

        let timezone = match var("COINBOARD_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid COINBOARD_TIMEZONE '{}': {}", name, e))?,
            None => chrono_tz::UTC,
        };

        let config = Self {
            symbols,
            price_url: var("COINBOARD_PRICE_URL").unwrap_or_else(|| DEFAULT_PRICE_URL.to_string()),
            news_url: var("COINBOARD_NEWS_URL").unwrap_or_else(|| DEFAULT_NEWS_URL.to_string()),
            refresh_interval: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            aliases,
            initial_symbol,
            news_limit,
            timezone,
            api_key: var("COINBOARD_API_KEY"),
        };
        config.engine_config().validate()?;
        Ok(config)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            symbols: self.symbols.clone(),
            refresh_interval: self.refresh_interval,
            initial_selection: Some(self.initial_symbol),
            label_timezone: self.timezone,
            ..Default::default()
        }
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => Ok(v.trim().parse::<T>()?),
        None => Ok(default),
    }
}
