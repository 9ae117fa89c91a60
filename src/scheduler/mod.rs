//! Cron jobs driving the two pipelines.
//!
//! Each job skips a tick while its previous run is still going, so a slow cycle never
//! overlaps itself. The two jobs may run at the same time as each other.

pub mod code_check;
pub mod livestream_check;

use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, state::AppState};

/// Registers both jobs and starts the scheduler.
///
/// # Arguments
/// - `state` - Shared state cloned into each job
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the lifetime of the bot
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler failed to start
pub async fn start_scheduler(state: AppState) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(code_check::job(state.clone())?).await?;
    scheduler.add(livestream_check::job(state)?).await?;
    scheduler.start().await?;

    tracing::info!(
        "Scheduler started: code check \"{}\", livestream check \"{}\"",
        code_check::SCHEDULE,
        livestream_check::SCHEDULE
    );

    Ok(scheduler)
}
