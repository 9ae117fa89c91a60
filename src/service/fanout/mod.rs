//! Best-effort fan-out to many guilds.
//!
//! `settle` runs one future per target concurrently and collects every outcome, so one
//! guild's failure never stops delivery to the others. `delivery` holds the per-guild
//! channel and thread logic shared by new-code notifications and livestream distribution.

pub mod alert;
pub mod delivery;

use std::{fmt::Display, future::Future};

use futures_util::future::join_all;

use crate::error::AppError;

/// Outcome of one batch, as `(target, result)` pairs in submission order.
pub struct BatchReport<K, T> {
    pub outcomes: Vec<(K, Result<T, AppError>)>,
}

impl<K, T> BatchReport<K, T> {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Successful outcomes only.
    pub fn successes(&self) -> impl Iterator<Item = (&K, &T)> {
        self.outcomes
            .iter()
            .filter_map(|(k, r)| r.as_ref().ok().map(|t| (k, t)))
    }
}

/// Runs every job concurrently and collects the outcomes.
///
/// Failures are logged with the batch label and the target; they are never propagated.
///
/// # Arguments
/// - `label` - Short description of the batch for the logs
/// - `jobs` - `(target, future)` pairs
///
/// # Returns
/// - `BatchReport` - One outcome per job
pub async fn settle<K, T, F>(label: &str, jobs: Vec<(K, F)>) -> BatchReport<K, T>
where
    K: Display,
    F: Future<Output = Result<T, AppError>>,
{
    let (targets, futures): (Vec<K>, Vec<F>) = jobs.into_iter().unzip();
    let results = join_all(futures).await;

    let report = BatchReport {
        outcomes: targets.into_iter().zip(results).collect(),
    };

    for (target, result) in &report.outcomes {
        if let Err(e) = result {
            tracing::warn!("{} failed for {}: {}", label, target, e);
        }
    }

    tracing::debug!(
        "{}: {} succeeded, {} failed",
        label,
        report.succeeded(),
        report.failed()
    );

    report
}
