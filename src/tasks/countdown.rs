//! Countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::state::{AppState, TickOutcome};

/// Time between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick the countdown for `run_id` once per second until it finishes or is cancelled
///
/// The first tick lands one period after the task starts. A stopped or
/// replaced run is only noticed at the next tick, so a cancelled task may
/// linger for up to one period.
pub async fn countdown_task(state: Arc<AppState>, run_id: u64) {
    debug!("Starting countdown task for run {}", run_id);

    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

    loop {
        interval.tick().await;

        match state.tick(run_id) {
            TickOutcome::Continue => {
                debug!("Run {} tick: {}s remaining", run_id, state.snapshot().countdown);
            }
            TickOutcome::Finished => {
                info!("Countdown finished (run {})", run_id);
                break;
            }
            TickOutcome::Cancelled => {
                debug!("Run {} no longer current, countdown task exiting", run_id);
                break;
            }
        }
    }
}
