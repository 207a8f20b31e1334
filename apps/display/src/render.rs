//! Rendering boundary: turns display records into log lines.

use tokio::sync::watch;

use coinboard_core::DisplayRecord;
use coinboard_market_data::{Article, AssetSymbol};

/// Heading of the scrolling ticker.
pub const TICKER_BANNER: &str = "DAILY COIN PRICES";

pub fn render_line(record: &DisplayRecord) -> String {
    format!(
        "{} ({}) {} | Last update: {} | {}",
        record.title, record.symbol, record.price, record.last_update_label, record.icon
    )
}

pub fn ticker_line(symbols: &[AssetSymbol]) -> String {
    let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
    format!("{} :: {}", TICKER_BANNER, symbols.join(" · "))
}

pub fn log_ticker(symbols: &[AssetSymbol]) {
    tracing::info!("{}", ticker_line(symbols));
}

pub fn log_headlines(articles: &[Article]) {
    if articles.is_empty() {
        tracing::info!("No headlines available");
        return;
    }
    for (rank, article) in articles.iter().enumerate() {
        tracing::info!(
            "News #{} [{}] {} <{}>",
            rank + 1,
            article.published_on.format("%Y-%m-%d %H:%M"),
            article.title,
            article.url
        );
    }
}

/// Log the current record and every later change until the engine stops.
pub async fn run_renderer(mut display: watch::Receiver<Option<DisplayRecord>>) {
    loop {
        let current = display.borrow_and_update().clone();
        if let Some(record) = current {
            tracing::info!("{}", render_line(&record));
        }
        if display.changed().await.is_err() {
            tracing::debug!("Display channel closed, renderer exiting");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinboard_core::{AssetCatalog, Portfolio};

    #[test]
    fn test_placeholder_line() {
        let selection = AssetCatalog::default().selection(AssetSymbol::Btc);
        let record = DisplayRecord::derive(&selection, &Portfolio::empty(), chrono_tz::UTC);

        assert_eq!(
            render_line(&record),
            "Bitcoin (BTC) Loading... | Last update: Not yet available | assets/btc.png"
        );
    }

    #[test]
    fn test_ticker_line() {
        assert_eq!(
            ticker_line(&AssetSymbol::ALL),
            "DAILY COIN PRICES :: BTC · ETH · USDC"
        );
    }

    #[tokio::test]
    async fn test_renderer_exits_when_engine_stops() {
        let (tx, rx) = watch::channel(None);
        let renderer = tokio::spawn(run_renderer(rx));
        drop(tx);
        renderer.await.unwrap();
    }
}
