use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::Job;

use crate::{error::AppError, service::reconciliation::ReconciliationService, state::AppState};

/// Every 5 minutes.
pub const SCHEDULE: &str = "0 */5 * * * *";

/// Builds the code reconciliation job.
pub fn job(state: AppState) -> Result<Job, AppError> {
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("Previous code check is still running, skipping this tick");
                return;
            };

            run(&state).await;
        })
    })?;

    Ok(job)
}

/// Runs one reconciliation cycle and logs its summary.
pub async fn run(state: &AppState) {
    match ReconciliationService::new(state).run_cycle().await {
        Ok(summary) => {
            if !summary.failed_games.is_empty() {
                tracing::warn!(
                    "Code check could not reach {} game feeds: {:?}",
                    summary.failed_games.len(),
                    summary.failed_games
                );
            }
            tracing::info!(
                "Code check complete: {} new, {} expired, {} reactivated, {} guilds notified",
                summary.new,
                summary.expired,
                summary.reactivated,
                summary.guilds_notified
            );
        }
        Err(e) => tracing::error!("Code check aborted: {}", e),
    }
}
