//! Guild settings repository.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild::DeliveryPreferences;

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every settings row resolved into delivery preferences, keyed by guild ID.
    ///
    /// Guilds without a row are absent from the map; callers use
    /// `DeliveryPreferences::default()` for them.
    ///
    /// # Returns
    /// - `Ok(HashMap<u64, DeliveryPreferences>)` - Preferences per guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<HashMap<u64, DeliveryPreferences>, DbErr> {
        let entities = entity::prelude::GuildSettings::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| match e.guild_id.parse::<u64>() {
                Ok(guild_id) => Some((guild_id, DeliveryPreferences::from_entity(e))),
                Err(_) => {
                    tracing::warn!("Skipping guild settings with invalid ID {}", e.guild_id);
                    None
                }
            })
            .collect())
    }

    pub async fn delete(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildSettings::delete_by_id(guild_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
