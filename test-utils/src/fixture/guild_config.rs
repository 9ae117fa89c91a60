//! Guild config fixtures for creating in-memory test data.

use entity::guild_config;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default test notification channel ID.
pub const DEFAULT_CHANNEL_ID: &str = "123456789";

/// Creates a guild config entity model with default values.
///
/// # Default Values
/// - guild_id: `"987654321"`
/// - channel_id: `"123456789"`
/// - every optional destination and role unset, alert flags cleared
pub fn entity() -> guild_config::Model {
    guild_config::Model {
        guild_id: DEFAULT_GUILD_ID.to_string(),
        channel_id: DEFAULT_CHANNEL_ID.to_string(),
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
    }
}
