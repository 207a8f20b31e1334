//! The single task that owns portfolio and selection state.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use coinboard_market_data::{AssetSymbol, MarketDataError, QuoteBatch};

use super::engine_command::EngineCommand;
use crate::portfolio::{Portfolio, PortfolioStore};
use crate::quotes::RateFetcher;
use crate::selection::{DisplayRecord, SelectionView};

struct InFlightRefresh {
    id: u64,
    task: JoinHandle<()>,
}

/// Owns [`PortfolioStore`] and [`SelectionView`] and applies commands to
/// them one at a time.
pub(crate) struct EngineWorker {
    store: PortfolioStore,
    view: SelectionView,
    fetcher: Arc<dyn RateFetcher>,
    /// Completions are sent back through a weak handle so an in-flight
    /// fetch never keeps the command channel open.
    completions: mpsc::WeakUnboundedSender<EngineCommand>,
    in_flight: Option<InFlightRefresh>,
    next_refresh_id: u64,
    tick_pending: bool,
    display_tx: watch::Sender<Option<DisplayRecord>>,
    published_revision: u64,
    portfolio_tx: watch::Sender<Arc<Portfolio>>,
}

impl EngineWorker {
    pub(crate) fn new(
        store: PortfolioStore,
        view: SelectionView,
        fetcher: Arc<dyn RateFetcher>,
        completions: mpsc::WeakUnboundedSender<EngineCommand>,
        display_tx: watch::Sender<Option<DisplayRecord>>,
        portfolio_tx: watch::Sender<Arc<Portfolio>>,
    ) -> Self {
        Self {
            store,
            view,
            fetcher,
            completions,
            in_flight: None,
            next_refresh_id: 0,
            tick_pending: false,
            display_tx,
            published_revision: 0,
            portfolio_tx,
        }
    }

    /// Process commands until shutdown is signalled or every sender is gone.
    ///
    /// Shutdown is checked before each command, so nothing queued behind
    /// it is applied.
    pub(crate) async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<EngineCommand>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        info!("Engine worker started");

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
            }
        }

        self.cancel_in_flight();
        info!("Engine worker shutting down");
    }

    pub(crate) fn handle(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Tick => self.on_tick(),
            EngineCommand::Select { symbol, reply } => {
                let record = self.on_select(symbol);
                if let Some(reply) = reply {
                    // The caller may have stopped waiting.
                    let _ = reply.send(record);
                }
            }
            EngineCommand::RefreshCompleted {
                refresh_id,
                outcome,
            } => self.on_refresh_completed(refresh_id, outcome),
        }
    }

    pub(crate) fn on_select(&mut self, symbol: AssetSymbol) -> DisplayRecord {
        if !self.store.symbols().contains(&symbol) {
            warn!(
                "{} is not in the tracked set; it will show a placeholder until tracked",
                symbol
            );
        }

        let portfolio = self.store.current();
        let record = self.view.select(symbol, &portfolio);
        self.publish_display();
        record
    }

    fn on_tick(&mut self) {
        if self.in_flight.is_some() {
            if !self.tick_pending {
                debug!("Refresh still in flight, deferring tick");
            }
            self.tick_pending = true;
            return;
        }
        self.dispatch_refresh();
    }

    fn on_refresh_completed(
        &mut self,
        refresh_id: u64,
        outcome: Result<QuoteBatch, MarketDataError>,
    ) {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == refresh_id => {}
            _ => {
                debug!("Discarding stale refresh #{}", refresh_id);
                return;
            }
        }
        self.in_flight = None;

        if self.store.apply(outcome, &mut self.view) {
            self.portfolio_tx.send_replace(self.store.current());
            self.publish_display();
        }

        if std::mem::take(&mut self.tick_pending) {
            self.dispatch_refresh();
        }
    }

    fn dispatch_refresh(&mut self) {
        self.next_refresh_id += 1;
        let refresh_id = self.next_refresh_id;
        let fetcher = Arc::clone(&self.fetcher);
        let symbols = self.store.symbols().to_vec();
        let completions = self.completions.clone();

        debug!("Dispatching refresh #{} for {} symbol(s)", refresh_id, symbols.len());

        let task = tokio::spawn(async move {
            let outcome = fetcher.fetch_all(&symbols).await;
            if let Some(commands) = completions.upgrade() {
                let _ = commands.send(EngineCommand::RefreshCompleted {
                    refresh_id,
                    outcome,
                });
            }
        });

        self.in_flight = Some(InFlightRefresh {
            id: refresh_id,
            task,
        });
    }

    fn publish_display(&mut self) {
        if self.view.revision() == self.published_revision {
            return;
        }
        self.published_revision = self.view.revision();
        self.display_tx.send_replace(self.view.current_display());
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!("Cancelling in-flight refresh #{}", in_flight.id);
            in_flight.task.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn in_flight_id(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.id)
    }

    #[cfg(test)]
    pub(crate) fn current_portfolio(&self) -> Arc<Portfolio> {
        self.store.current()
    }

    #[cfg(test)]
    pub(crate) fn current_display(&self) -> Option<DisplayRecord> {
        self.view.current_display()
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
