//! Guild language cache.
//!
//! Holds every guild's language selection in memory so a fan-out to hundreds of guilds does
//! not query the language table once per message. The whole table is reloaded when the TTL
//! runs out or after an invalidation.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::{Mutex, RwLock};

use crate::data::guild_language::GuildLanguageRepository;

/// Language used for guilds without a stored selection.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Default)]
struct CacheState {
    languages: HashMap<u64, String>,
    /// `None` until the first load and after an invalidation.
    loaded_at: Option<Instant>,
    /// Number of completed reloads.
    loads: u64,
}

impl CacheState {
    fn is_stale(&self, ttl: Duration) -> bool {
        match self.loaded_at {
            Some(loaded_at) => loaded_at.elapsed() >= ttl,
            None => true,
        }
    }
}

/// Cache of guild language selections with an injected TTL.
pub struct LanguageCache {
    db: DatabaseConnection,
    ttl: Duration,
    state: RwLock<CacheState>,
    /// Held while a stale table is reloaded so concurrent lookups wait for one reload.
    reload: Mutex<()>,
}

impl LanguageCache {
    /// Creates an empty cache. Nothing is loaded until the first lookup or `prime`.
    ///
    /// # Arguments
    /// - `db` - Database connection used to reload the language table
    /// - `ttl` - How long a loaded table is trusted before it is reloaded
    pub fn new(db: DatabaseConnection, ttl: Duration) -> Self {
        Self {
            db,
            ttl,
            state: RwLock::new(CacheState::default()),
            reload: Mutex::new(()),
        }
    }

    /// Loads every guild's language in one query, replacing the cached table.
    ///
    /// Called at the start of each reconciliation cycle alongside the other batch reads.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of guilds with a stored language
    /// - `Err(DbErr)` - Database error; the previous table is kept
    pub async fn prime(&self) -> Result<usize, DbErr> {
        let languages = GuildLanguageRepository::new(&self.db).get_all().await?;
        let count = languages.len();

        let mut state = self.state.write().await;
        state.languages = languages;
        state.loaded_at = Some(Instant::now());
        state.loads += 1;

        Ok(count)
    }

    /// Gets a guild's language, reloading the table first if it is stale.
    ///
    /// A failed reload is logged and the previous table is used until the TTL runs out
    /// again.
    ///
    /// # Returns
    /// - `String` - The guild's language, or `DEFAULT_LANGUAGE` if none is stored
    pub async fn language_for(&self, guild_id: u64) -> String {
        self.refresh_if_stale().await;

        self.state
            .read()
            .await
            .languages
            .get(&guild_id)
            .cloned()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    /// Reloads the table if it is stale.
    ///
    /// Staleness is checked again once the reload lock is held, so lookups that raced on an
    /// expired table reuse the reload that finished while they waited.
    async fn refresh_if_stale(&self) {
        let observed = {
            let state = self.state.read().await;
            if !state.is_stale(self.ttl) {
                return;
            }
            state.loads
        };

        let _reload = self.reload.lock().await;

        {
            let state = self.state.read().await;
            if state.loads != observed && !state.is_stale(self.ttl) {
                return;
            }
        }

        if let Err(e) = self.prime().await {
            tracing::warn!("Failed to reload guild languages: {}", e);
            let mut state = self.state.write().await;
            state.loaded_at = Some(Instant::now());
            state.loads += 1;
        }
    }

    /// Drops a guild's entry and forces a reload on the next lookup.
    pub async fn invalidate(&self, guild_id: u64) {
        let mut state = self.state.write().await;
        state.languages.remove(&guild_id);
        state.loaded_at = None;
    }

    /// Drops every entry and forces a reload on the next lookup.
    pub async fn invalidate_all(&self) {
        let mut state = self.state.write().await;
        state.languages.clear();
        state.loaded_at = None;
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::GuildLanguage;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn unknown_guild_uses_default_language() {
        let test = TestBuilder::new().with_table(GuildLanguage).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = LanguageCache::new(db.clone(), Duration::from_secs(300));

        assert_eq!(cache.language_for(1).await, DEFAULT_LANGUAGE);
    }

    #[tokio::test]
    async fn fresh_table_is_served_from_memory() {
        let test = TestBuilder::new().with_table(GuildLanguage).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_guild_language(db, "1", "ja").await.unwrap();

        let cache = LanguageCache::new(db.clone(), Duration::from_secs(300));
        assert_eq!(cache.prime().await.unwrap(), 1);

        factory::create_guild_language(db, "2", "de").await.unwrap();

        assert_eq!(cache.language_for(1).await, "ja");
        assert_eq!(cache.language_for(2).await, DEFAULT_LANGUAGE);
    }

    #[tokio::test]
    async fn expired_table_is_reloaded() {
        let test = TestBuilder::new().with_table(GuildLanguage).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = LanguageCache::new(db.clone(), Duration::ZERO);
        cache.prime().await.unwrap();

        factory::create_guild_language(db, "2", "de").await.unwrap();

        assert_eq!(cache.language_for(2).await, "de");
    }

    #[tokio::test]
    async fn concurrent_lookups_share_one_reload() {
        let test = TestBuilder::new().with_table(GuildLanguage).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_guild_language(db, "1", "ja").await.unwrap();
        factory::create_guild_language(db, "2", "de").await.unwrap();

        let cache = LanguageCache::new(db.clone(), Duration::from_secs(300));

        let (first, second, third, fourth) = tokio::join!(
            cache.language_for(1),
            cache.language_for(2),
            cache.language_for(3),
            cache.language_for(1),
        );

        assert_eq!(first, "ja");
        assert_eq!(second, "de");
        assert_eq!(third, DEFAULT_LANGUAGE);
        assert_eq!(fourth, "ja");
        assert_eq!(cache.state.read().await.loads, 1);
    }

    #[tokio::test]
    async fn invalidation_forces_reload() {
        let test = TestBuilder::new().with_table(GuildLanguage).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_guild_language(db, "1", "ja").await.unwrap();

        let cache = LanguageCache::new(db.clone(), Duration::from_secs(300));
        cache.prime().await.unwrap();

        factory::create_guild_language(db, "2", "de").await.unwrap();
        cache.invalidate(1).await;

        assert_eq!(cache.language_for(2).await, "de");
        assert_eq!(cache.language_for(1).await, "ja");

        factory::create_guild_language(db, "3", "fr").await.unwrap();
        cache.invalidate_all().await;

        assert_eq!(cache.language_for(3).await, "fr");
    }
}
