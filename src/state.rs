//! Shared state handed to the scheduled jobs.
//!
//! Built once during startup after the database, bot client and string tables are ready.
//! Every field is cheap to clone: the connection is a pool and the rest are `Arc`s.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::{
    i18n::{LanguageCache, Translator},
    livestream::icons::IconMap,
    messenger::Messenger,
    upstream::UpstreamClient,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Discord access for resolving destinations and sending messages.
    pub messenger: Arc<dyn Messenger>,

    /// Client for the code, livestream and event feeds.
    pub upstream: Arc<UpstreamClient>,

    /// String tables bound to the guild language cache.
    pub translator: Arc<Translator>,

    /// Guild language cache, primed at the start of each reconciliation cycle.
    pub languages: Arc<LanguageCache>,

    /// Reward icon names for livestream codes.
    pub icons: Arc<IconMap>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        messenger: Arc<dyn Messenger>,
        upstream: Arc<UpstreamClient>,
        translator: Arc<Translator>,
        languages: Arc<LanguageCache>,
        icons: Arc<IconMap>,
    ) -> Self {
        Self {
            db,
            messenger,
            upstream,
            translator,
            languages,
            icons,
        }
    }
}
