//! Guild config factory for creating notification destination rows.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .genshin_role_id(Some("42"))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild_config::Model,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id / channel_id: unique snowflakes
    /// - no livestream channel, threads or roles
    /// - both alert flags cleared
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: entity::guild_config::Model {
                guild_id: next_snowflake().to_string(),
                channel_id: next_snowflake().to_string(),
                livestream_channel_id: None,
                genshin_thread_id: None,
                hsr_thread_id: None,
                zzz_thread_id: None,
                genshin_role_id: None,
                hsr_role_id: None,
                zzz_role_id: None,
                channel_missing_notified: false,
                channel_missing_notified_at: None,
                permission_missing_notified: false,
                permission_missing_notified_at: None,
                permission_missing_permission: None,
            },
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.entity.channel_id = channel_id.into();
        self
    }

    pub fn livestream_channel_id(mut self, channel_id: Option<&str>) -> Self {
        self.entity.livestream_channel_id = channel_id.map(str::to_string);
        self
    }

    pub fn genshin_thread_id(mut self, thread_id: Option<&str>) -> Self {
        self.entity.genshin_thread_id = thread_id.map(str::to_string);
        self
    }

    pub fn hsr_thread_id(mut self, thread_id: Option<&str>) -> Self {
        self.entity.hsr_thread_id = thread_id.map(str::to_string);
        self
    }

    pub fn zzz_thread_id(mut self, thread_id: Option<&str>) -> Self {
        self.entity.zzz_thread_id = thread_id.map(str::to_string);
        self
    }

    pub fn genshin_role_id(mut self, role_id: Option<&str>) -> Self {
        self.entity.genshin_role_id = role_id.map(str::to_string);
        self
    }

    pub fn hsr_role_id(mut self, role_id: Option<&str>) -> Self {
        self.entity.hsr_role_id = role_id.map(str::to_string);
        self
    }

    pub fn zzz_role_id(mut self, role_id: Option<&str>) -> Self {
        self.entity.zzz_role_id = role_id.map(str::to_string);
        self
    }

    /// Marks the channel-missing alert as already sent.
    pub fn channel_missing_notified(mut self, notified: bool) -> Self {
        self.entity.channel_missing_notified = notified;
        self
    }

    /// Marks the permission alert as already sent for the given permission list.
    pub fn permission_missing_notified(mut self, permission: Option<&str>) -> Self {
        self.entity.permission_missing_notified = permission.is_some();
        self.entity.permission_missing_permission = permission.map(str::to_string);
        self
    }

    /// Builds and inserts the guild config into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created guild config
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let e = self.entity;
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(e.guild_id),
            channel_id: ActiveValue::Set(e.channel_id),
            livestream_channel_id: ActiveValue::Set(e.livestream_channel_id),
            genshin_thread_id: ActiveValue::Set(e.genshin_thread_id),
            hsr_thread_id: ActiveValue::Set(e.hsr_thread_id),
            zzz_thread_id: ActiveValue::Set(e.zzz_thread_id),
            genshin_role_id: ActiveValue::Set(e.genshin_role_id),
            hsr_role_id: ActiveValue::Set(e.hsr_role_id),
            zzz_role_id: ActiveValue::Set(e.zzz_role_id),
            channel_missing_notified: ActiveValue::Set(e.channel_missing_notified),
            channel_missing_notified_at: ActiveValue::Set(e.channel_missing_notified_at),
            permission_missing_notified: ActiveValue::Set(e.permission_missing_notified),
            permission_missing_notified_at: ActiveValue::Set(e.permission_missing_notified_at),
            permission_missing_permission: ActiveValue::Set(e.permission_missing_permission),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
