//! Guild removal handler.
//!
//! `guild_delete` fires both when the bot is kicked or the guild is deleted, and when a
//! guild goes unavailable during a Discord outage. Only the first case removes the guild's
//! stored configuration; an outage leaves it untouched.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::service::{guild::GuildService, i18n::LanguageCache};

/// Whether a `guild_delete` event means the bot was removed from the guild.
pub fn is_removal(incomplete: &UnavailableGuild) -> bool {
    !incomplete.unavailable
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `db` - Database connection
/// - `languages` - Language cache to evict the guild from
/// - `_ctx` - Discord context (unused)
/// - `incomplete` - Guild ID and availability flag
/// - `_full` - Cached guild data, if any (unused)
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    languages: &LanguageCache,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if !is_removal(&incomplete) {
        tracing::warn!("Guild {} is unavailable, keeping its configuration", guild_id);
        return;
    }

    match GuildService::new(db, languages).cleanup(guild_id).await {
        Ok(()) => tracing::info!("Removed from guild {}, configuration deleted", guild_id),
        Err(e) => tracing::error!("Failed to clean up guild {}: {}", guild_id, e),
    }
}
