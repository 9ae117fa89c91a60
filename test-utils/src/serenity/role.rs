//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with the given permission bits.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); pass the guild ID for the `@everyone` role
/// - `name` - Role name
/// - `permissions` - Raw permission bitset
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// let everyone = create_test_role(guild_id, "@everyone", Permissions::VIEW_CHANNEL.bits());
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 0,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
