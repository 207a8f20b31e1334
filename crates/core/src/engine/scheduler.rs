//! Periodic refresh ticks.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::engine_command::EngineCommand;

/// Starts the tick scheduler.
///
/// The first tick fires immediately; later ticks stay on the grid anchored
/// at start. Ticks missed while the runtime was stalled are skipped rather
/// than replayed in a burst.
pub(crate) fn start_refresh_scheduler(
    period: Duration,
    commands: mpsc::UnboundedSender<EngineCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Refresh scheduler started ({}s interval)", period.as_secs_f64());

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if commands.send(EngineCommand::Tick).is_err() {
                debug!("Engine worker gone, stopping refresh scheduler");
                return;
            }
        }
    })
}
