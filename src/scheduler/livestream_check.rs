use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::Job;

use crate::{error::AppError, service::livestream::LivestreamTracker, state::AppState};

/// Every 3 minutes.
pub const SCHEDULE: &str = "0 */3 * * * *";

/// Builds the livestream polling job.
pub fn job(state: AppState) -> Result<Job, AppError> {
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("Previous livestream check is still running, skipping this tick");
                return;
            };

            run(&state).await;
        })
    })?;

    Ok(job)
}

pub async fn run(state: &AppState) {
    let report = LivestreamTracker::new(state).poll_all().await;

    for (game, tracked) in report.successes() {
        if let Some(livestream_state) = tracked {
            tracing::debug!("Livestream {} is {:?}", game, livestream_state);
        }
    }

    tracing::info!(
        "Livestream check complete: {} games polled, {} failed",
        report.succeeded(),
        report.failed()
    );
}
