//! Engine events module.
//!
//! Provides the engine event types and the sink trait the portfolio store
//! reports refresh outcomes through. Hosts implement the sink to forward
//! events to logs, metrics or a UI.

mod engine_event;
mod sink;

pub use engine_event::*;
pub use sink::*;
