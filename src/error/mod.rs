//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors. Scheduled
//! jobs log it and carry on; nothing in the bot surfaces an error to an end user directly.

pub mod config;
pub mod delivery;
pub mod internal;
pub mod upstream;

use thiserror::Error;

use crate::error::{
    config::ConfigError, delivery::DeliveryError, internal::InternalError,
    upstream::UpstreamError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Aborts the current cycle; the next scheduled tick starts from scratch.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Upstream code, livestream or event feed failure.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// Chat platform delivery failure.
    #[error(transparent)]
    DeliveryErr(#[from] DeliveryError),

    /// Failed to read a locale table or icon map from disk.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Failed to parse a JSON locale table or icon map.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Unexpected data indicating a bug or corrupted row.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the size of `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
