use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coinboard_core::events::LogEventSink;
use coinboard_core::{EngineHandle, MarketRateFetcher, NewsService};
use coinboard_market_data::{AssetSymbol, CryptoCompareNewsProvider, CryptoCompareProvider};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("COINBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_engine(config: &Config) -> anyhow::Result<EngineHandle> {
    let mut provider =
        CryptoCompareProvider::with_base_url(config.price_url.clone(), config.request_timeout);
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    tracing::info!(
        "Price provider at {} with {} alias(es)",
        provider.base_url(),
        config.aliases.len()
    );

    let fetcher = MarketRateFetcher::with_aliases(Arc::new(provider), config.aliases.clone());
    let engine = EngineHandle::spawn(
        config.engine_config(),
        Arc::new(fetcher),
        Arc::new(LogEventSink),
    )?;
    Ok(engine)
}

pub fn build_news_service(config: &Config) -> NewsService {
    let mut provider =
        CryptoCompareNewsProvider::with_base_url(config.news_url.clone(), config.request_timeout);
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    NewsService::new(Arc::new(provider))
}

/// Apply one line typed by the user as a selection.
pub async fn select_from_input(engine: &EngineHandle, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    match line.parse::<AssetSymbol>() {
        Ok(symbol) => {
            if let Err(e) = engine.select(symbol).await {
                tracing::warn!("Selection of {} failed: {}", symbol, e);
            }
        }
        Err(e) => {
            let choices: Vec<&str> = AssetSymbol::ALL.iter().map(|s| s.as_str()).collect();
            tracing::warn!("{}; choose one of {}", e, choices.join(", "));
        }
    }
}
