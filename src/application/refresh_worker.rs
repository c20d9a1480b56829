//! Periodic refresh of the reference dataset.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{info, warn};

use crate::application::services::StatusService;

/// Runs the periodic-timer trigger forever.
///
/// The cache is warmed once immediately, then refreshed after
/// `initial_delay` and every `period` thereafter. A tick that finds no
/// dataset is logged and retried on the next tick.
pub async fn run_refresh_worker(
    service: Arc<StatusService>,
    initial_delay: Duration,
    period: Duration,
) {
    match service.handle_timer().await {
        Some(count) => info!("Reference dataset ready ({} records)", count),
        None => warn!("Reference dataset unavailable at startup"),
    }

    let mut ticker = interval_at(Instant::now() + initial_delay, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        info!("Periodic timer elapsed, refreshing reference dataset");
        if service.handle_timer().await.is_none() {
            warn!("Periodic refresh produced no dataset");
        }
    }
}
