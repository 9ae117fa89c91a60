//! Guild config repository.
//!
//! Guild configs are written by the setup command. The bot only reads them, flips the
//! at-most-once alert flags, and deletes them when it is removed from a guild.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::guild::GuildConfig;

use entity::guild_config::Column;

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every guild config.
    ///
    /// Rows with a malformed snowflake are skipped with a warning rather than failing the
    /// whole load, so one corrupted guild cannot stop delivery to the others.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildConfig>)` - All parseable configs
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<GuildConfig>, DbErr> {
        let entities = entity::prelude::GuildConfig::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| {
                let guild_id = e.guild_id.clone();
                match GuildConfig::from_entity(e) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        tracing::warn!("Skipping guild config {}: {}", guild_id, err);
                        None
                    }
                }
            })
            .collect())
    }

    /// Gets the config for a single guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Config found and parsed
    /// - `Ok(None)` - No config, or the stored row is malformed
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.and_then(|e| GuildConfig::from_entity(e).ok()))
    }

    /// Records that the channel-missing alert was sent to the owner.
    ///
    /// # Returns
    /// - `Ok(())` - Flag set
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_channel_missing_notified(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::GuildConfig::update_many()
            .col_expr(Column::ChannelMissingNotified, Expr::value(true))
            .col_expr(Column::ChannelMissingNotifiedAt, Expr::value(Utc::now()))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records that the permission alert for `permission` was sent to the owner.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the alert was sent for
    /// - `permission` - Comma-separated list of the missing permissions
    pub async fn mark_permission_missing_notified(
        &self,
        guild_id: u64,
        permission: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::GuildConfig::update_many()
            .col_expr(Column::PermissionMissingNotified, Expr::value(true))
            .col_expr(Column::PermissionMissingNotifiedAt, Expr::value(Utc::now()))
            .col_expr(
                Column::PermissionMissingPermission,
                Expr::value(permission.to_string()),
            )
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a guild's config.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildConfig::delete_by_id(guild_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
