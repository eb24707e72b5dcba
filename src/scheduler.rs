// Background update loop: run one cycle, log the outcome, sleep, repeat.
// A failed cycle never stops the loop; the process exiting is the only end.

use std::time::Duration;

use crate::cycle::{run_cycle, AppContext, CycleKind};

/// Wait between scheduled update cycles.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Spawn the background task that refreshes the sheet forever. Runs
/// independently of the request-serving path; started once at startup.
pub fn spawn_update_worker(ctx: AppContext) {
    tokio::spawn(async move {
        loop {
            match run_cycle(&ctx, CycleKind::Scheduled).await {
                Ok(stamp) => tracing::info!("war data updated at {stamp}"),
                Err(e) => tracing::error!("update cycle failed: {e}"),
            }
            tracing::debug!(
                "waiting {}s before next update",
                UPDATE_INTERVAL.as_secs()
            );
            tokio::time::sleep(UPDATE_INTERVAL).await;
        }
    });
}
