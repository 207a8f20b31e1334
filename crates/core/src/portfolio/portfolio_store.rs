use std::sync::Arc;

use log::{debug, warn};

use coinboard_market_data::{AssetSymbol, MarketDataError, QuoteBatch};

use super::{Portfolio, PortfolioSubscriber};
use crate::events::{EngineEvent, EngineEventSink};
use crate::quotes::RateFetcher;

/// Owns the authoritative [`Portfolio`] for a fixed set of symbols.
///
/// A refresh either replaces the quotes for every symbol in the fetched
/// batch or, on failure, leaves the snapshot exactly as it was. Failures
/// are logged and reported to the event sink; they are never returned to
/// the caller.
pub struct PortfolioStore {
    symbols: Vec<AssetSymbol>,
    current: Arc<Portfolio>,
    event_sink: Arc<dyn EngineEventSink>,
}

impl PortfolioStore {
    pub fn new(symbols: Vec<AssetSymbol>, event_sink: Arc<dyn EngineEventSink>) -> Self {
        Self {
            symbols,
            current: Arc::new(Portfolio::empty()),
            event_sink,
        }
    }

    /// The symbols fetched on every refresh.
    pub fn symbols(&self) -> &[AssetSymbol] {
        &self.symbols
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<Portfolio> {
        Arc::clone(&self.current)
    }

    /// Fetch every tracked symbol and apply the result.
    ///
    /// Returns true when a new snapshot was installed.
    pub async fn refresh(
        &mut self,
        fetcher: &dyn RateFetcher,
        subscriber: &mut dyn PortfolioSubscriber,
    ) -> bool {
        let outcome = fetcher.fetch_all(&self.symbols).await;
        self.apply(outcome, subscriber)
    }

    /// Apply the outcome of a fetch.
    ///
    /// This is the non-suspending half of [`refresh`](Self::refresh): on
    /// success the new snapshot is installed and `subscriber` is notified
    /// before this returns.
    pub fn apply(
        &mut self,
        outcome: Result<QuoteBatch, MarketDataError>,
        subscriber: &mut dyn PortfolioSubscriber,
    ) -> bool {
        match outcome {
            Ok(batch) => {
                let updated = batch.symbols();
                self.current = Arc::new(self.current.with_batch(&batch));
                debug!(
                    "Installed portfolio snapshot with {} quote(s) at {}",
                    self.current.len(),
                    batch.observed_at
                );

                subscriber.on_portfolio_updated(&self.current, &updated);
                self.event_sink.emit(EngineEvent::refresh_succeeded(
                    updated,
                    batch.observed_at,
                ));
                true
            }
            Err(err) => {
                warn!("Portfolio refresh failed, keeping previous snapshot: {}", err);
                self.event_sink
                    .emit(EngineEvent::refresh_failed(err.to_string(), err.is_transient()));
                false
            }
        }
    }
}
