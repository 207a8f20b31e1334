//! Engine module - polling and state synchronization.
//!
//! A scheduler task emits ticks on a channel. A single worker task owns the
//! [`PortfolioStore`](crate::portfolio::PortfolioStore) and the
//! [`SelectionView`](crate::selection::SelectionView) and handles ticks,
//! selections and fetch completions strictly in arrival order, so no lock
//! guards either of them.
//!
//! ```text
//!  scheduler ──Tick──────────┐
//!  EngineHandle ──Select─────┼──▶ mpsc ──▶ worker ──▶ watch<Option<DisplayRecord>>
//!  fetch task ──Completed────┘              │    └──▶ watch<Arc<Portfolio>>
//!       ▲                                   │
//!       └────────── spawn (one at a time) ──┘
//! ```
//!
//! Fetches run outside the worker so selections are never blocked by the
//! network. At most one fetch is in flight; ticks that arrive meanwhile
//! collapse into a single follow-up refresh dispatched on completion.

mod engine_command;
mod engine_config;
mod engine_handle;
mod scheduler;
mod worker;

pub use engine_config::*;
pub use engine_handle::*;
