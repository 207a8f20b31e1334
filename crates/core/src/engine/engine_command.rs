use tokio::sync::oneshot;

use coinboard_market_data::{AssetSymbol, MarketDataError, QuoteBatch};

use crate::selection::DisplayRecord;

/// Messages processed by the engine worker, in arrival order.
#[derive(Debug)]
pub(crate) enum EngineCommand {
    /// A refresh period elapsed.
    Tick,

    /// Show a different asset. The recomputed record is sent back on `reply`.
    Select {
        symbol: AssetSymbol,
        reply: Option<oneshot::Sender<DisplayRecord>>,
    },

    /// A fetch dispatched by the worker finished.
    RefreshCompleted {
        refresh_id: u64,
        outcome: Result<QuoteBatch, MarketDataError>,
    },
}
