//! Engine event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use super::EngineEvent;

/// Trait for receiving engine events.
///
/// `emit()` is called from the engine worker between commands, so it must
/// be fast and non-blocking. Failure to deliver an event must not affect
/// the engine.
pub trait EngineEventSink: Send + Sync {
    /// Emit a single engine event.
    fn emit(&self, event: EngineEvent);
}

/// No-op implementation for tests or hosts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl EngineEventSink for NoOpEventSink {
    fn emit(&self, _event: EngineEvent) {}
}

/// Writes every event to the log.
#[derive(Clone, Default)]
pub struct LogEventSink;

impl EngineEventSink for LogEventSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::RefreshSucceeded {
                symbols,
                observed_at,
            } => info!(
                "Refreshed {} quote(s) observed at {}",
                symbols.len(),
                observed_at
            ),
            EngineEvent::RefreshFailed { message, transient } => {
                warn!("Refresh failed (transient: {}): {}", transient, message)
            }
        }
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or_default()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EngineEventSink for MockEventSink {
    fn emit(&self, event: EngineEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
