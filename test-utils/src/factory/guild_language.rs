//! Guild language factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guild language row.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the language applies to
/// - `language` - Language code such as `"en"` or `"ja"`
///
/// # Returns
/// - `Ok(entity::guild_language::Model)` - Created language row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_language(
    db: &DatabaseConnection,
    guild_id: &str,
    language: &str,
) -> Result<entity::guild_language::Model, DbErr> {
    entity::guild_language::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        language: ActiveValue::Set(language.to_string()),
    }
    .insert(db)
    .await
}
