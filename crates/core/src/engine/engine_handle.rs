use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use coinboard_market_data::AssetSymbol;

use super::engine_command::EngineCommand;
use super::scheduler::start_refresh_scheduler;
use super::worker::EngineWorker;
use super::EngineConfig;
use crate::errors::{Error, Result};
use crate::events::EngineEventSink;
use crate::portfolio::{Portfolio, PortfolioStore};
use crate::quotes::RateFetcher;
use crate::selection::{DisplayRecord, SelectionView};

/// Handle to a running engine.
///
/// Dropping the handle tears the engine down: the scheduler stops, any
/// in-flight fetch is aborted and its result is never applied. Use
/// [`shutdown`](Self::shutdown) to also wait for the worker to exit.
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<EngineCommand>,
    display_rx: watch::Receiver<Option<DisplayRecord>>,
    portfolio_rx: watch::Receiver<Arc<Portfolio>>,
    scheduler: JoinHandle<()>,
    worker: Option<JoinHandle<()>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl EngineHandle {
    /// Validate `config` and start the worker and scheduler on the current
    /// tokio runtime.
    ///
    /// The initial selection, if any, is applied before the first tick so
    /// the display starts on its placeholder.
    pub fn spawn(
        config: EngineConfig,
        fetcher: Arc<dyn RateFetcher>,
        event_sink: Arc<dyn EngineEventSink>,
    ) -> Result<Self> {
        config.validate()?;

        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(None);
        let (portfolio_tx, portfolio_rx) = watch::channel(Arc::new(Portfolio::empty()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let store = PortfolioStore::new(config.symbols.clone(), event_sink);
        let view = SelectionView::new(config.catalog.clone(), config.label_timezone);
        let mut worker = EngineWorker::new(
            store,
            view,
            fetcher,
            commands_tx.downgrade(),
            display_tx,
            portfolio_tx,
        );
        if let Some(symbol) = config.initial_selection {
            worker.on_select(symbol);
        }

        info!(
            "Starting engine for {:?} every {}s",
            config.symbols,
            config.refresh_interval.as_secs_f64()
        );
        let worker = tokio::spawn(worker.run(commands_rx, shutdown_rx));
        let scheduler = start_refresh_scheduler(config.refresh_interval, commands_tx.clone());

        Ok(Self {
            commands: commands_tx,
            display_rx,
            portfolio_rx,
            scheduler,
            worker: Some(worker),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Show `symbol` and return the record computed from the portfolio
    /// snapshot current at the moment the selection was processed.
    pub async fn select(&self, symbol: AssetSymbol) -> Result<DisplayRecord> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(EngineCommand::Select {
                symbol,
                reply: Some(reply_tx),
            })
            .map_err(|_| Error::EngineClosed)?;
        reply_rx.await.map_err(|_| Error::EngineClosed)
    }

    /// The last published display record; `None` until something is selected.
    pub fn current_display(&self) -> Option<DisplayRecord> {
        self.display_rx.borrow().clone()
    }

    /// The last installed portfolio snapshot.
    pub fn portfolio(&self) -> Arc<Portfolio> {
        self.portfolio_rx.borrow().clone()
    }

    /// Receiver notified on every visible display change.
    pub fn subscribe_display(&self) -> watch::Receiver<Option<DisplayRecord>> {
        self.display_rx.clone()
    }

    /// Receiver notified on every installed portfolio snapshot.
    pub fn subscribe_portfolio(&self) -> watch::Receiver<Arc<Portfolio>> {
        self.portfolio_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Stop the engine and wait for the worker to exit.
    pub async fn shutdown(mut self) {
        self.teardown();
        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.await {
                warn!("Engine worker ended abnormally: {}", e);
            }
        }
        info!("Engine stopped");
    }

    fn teardown(&mut self) {
        self.scheduler.abort();
        if let Some(shutdown) = self.shutdown_tx.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}
