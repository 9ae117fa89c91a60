//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique Discord-style snowflake for test data.
///
/// Snowflakes are stored as strings but must parse to `u64`, so factories use this
/// rather than formatting arbitrary text.
///
/// # Returns
/// - `u64` - Unique numeric ID well above zero
pub fn next_snowflake() -> u64 {
    100_000_000_000_000_000 + next_id()
}

/// Creates a guild config together with a settings row that enables auto-send.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((config, settings))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_settings(
    db: &DatabaseConnection,
) -> Result<(entity::guild_config::Model, entity::guild_settings::Model), DbErr> {
    let config = crate::factory::guild_config::create_guild_config(db).await?;
    let settings = crate::factory::guild_settings::create_guild_settings(db, &config.guild_id).await?;

    Ok((config, settings))
}
