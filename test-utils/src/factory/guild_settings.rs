//! Guild settings factory for creating delivery preference rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings.
///
/// Defaults to auto-send enabled with channel and thread options unset and the
/// favorite-games filter disabled.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild_settings::Model,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory for the given guild.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the settings belong to
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        Self {
            db,
            entity: entity::guild_settings::Model {
                guild_id: guild_id.to_string(),
                auto_send_enabled: true,
                auto_send_channel: None,
                auto_send_threads: None,
                favorite_games_enabled: false,
                favorite_genshin: None,
                favorite_hkrpg: None,
                favorite_nap: None,
            },
        }
    }

    pub fn auto_send_enabled(mut self, enabled: bool) -> Self {
        self.entity.auto_send_enabled = enabled;
        self
    }

    pub fn auto_send_channel(mut self, enabled: Option<bool>) -> Self {
        self.entity.auto_send_channel = enabled;
        self
    }

    pub fn auto_send_threads(mut self, enabled: Option<bool>) -> Self {
        self.entity.auto_send_threads = enabled;
        self
    }

    /// Enables the favorite-games filter with the given per-game flags.
    ///
    /// # Arguments
    /// - `genshin` / `hkrpg` / `nap` - Per-game flag, `None` leaves the game unset
    pub fn favorites(
        mut self,
        genshin: Option<bool>,
        hkrpg: Option<bool>,
        nap: Option<bool>,
    ) -> Self {
        self.entity.favorite_games_enabled = true;
        self.entity.favorite_genshin = genshin;
        self.entity.favorite_hkrpg = hkrpg;
        self.entity.favorite_nap = nap;
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        let e = self.entity;
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(e.guild_id),
            auto_send_enabled: ActiveValue::Set(e.auto_send_enabled),
            auto_send_channel: ActiveValue::Set(e.auto_send_channel),
            auto_send_threads: ActiveValue::Set(e.auto_send_threads),
            favorite_games_enabled: ActiveValue::Set(e.favorite_games_enabled),
            favorite_genshin: ActiveValue::Set(e.favorite_genshin),
            favorite_hkrpg: ActiveValue::Set(e.favorite_hkrpg),
            favorite_nap: ActiveValue::Set(e.favorite_nap),
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings with default values.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db, guild_id).build().await
}
