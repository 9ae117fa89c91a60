//! Guild-level operations shared by the fan-out paths and the gateway handlers.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        guild_config::GuildConfigRepository, guild_language::GuildLanguageRepository,
        guild_settings::GuildSettingsRepository,
    },
    error::AppError,
    model::guild::GuildTarget,
    service::i18n::LanguageCache,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageCache,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageCache) -> Self {
        Self { db, languages }
    }

    /// Loads every configured guild with its resolved delivery preferences.
    ///
    /// Configs and settings are read in two batch queries. Guilds without a settings row
    /// get the defaults, which enable auto-send to both channel and threads.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildTarget>)` - One target per configured guild
    /// - `Err(AppError::DbErr)` - Either query failed
    pub async fn load_targets(&self) -> Result<Vec<GuildTarget>, AppError> {
        let config_repo = GuildConfigRepository::new(self.db);
        let settings_repo = GuildSettingsRepository::new(self.db);

        let (configs, mut settings) =
            tokio::try_join!(config_repo.get_all(), settings_repo.get_all())?;

        Ok(configs
            .into_iter()
            .map(|config| {
                let prefs = settings.remove(&config.guild_id).unwrap_or_default();
                GuildTarget { config, prefs }
            })
            .collect())
    }

    /// Deletes a guild's config, settings and language after the bot left it.
    ///
    /// # Returns
    /// - `Ok(())` - All three records removed (missing records are not an error)
    /// - `Err(AppError::DbErr)` - A delete failed
    pub async fn cleanup(&self, guild_id: u64) -> Result<(), AppError> {
        let config_repo = GuildConfigRepository::new(self.db);
        let settings_repo = GuildSettingsRepository::new(self.db);
        let language_repo = GuildLanguageRepository::new(self.db);

        tokio::try_join!(
            config_repo.delete(guild_id),
            settings_repo.delete(guild_id),
            language_repo.delete(guild_id),
        )?;

        self.languages.invalidate(guild_id).await;

        tracing::info!("Removed configuration for guild {}", guild_id);

        Ok(())
    }
}
