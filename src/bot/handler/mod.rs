use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::service::i18n::LanguageCache;

pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub languages: Arc<LanguageCache>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, languages: Arc<LanguageCache>) -> Self {
        Self { db, languages }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, &self.languages, ctx, incomplete, full).await;
    }
}
