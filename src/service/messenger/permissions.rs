//! Effective channel permission computation.
//!
//! Follows Discord's documented order: base permissions from `@everyone` and the member's
//! roles, administrator short-circuit, then the `@everyone` overwrite, the combined role
//! overwrites and finally the member overwrite. Threads use their parent's overwrites.

use std::collections::HashMap;

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, Role, RoleId, UserId};

/// Permissions needed to post a notification in a text or announcement channel.
pub const CHANNEL_REQUIRED: Permissions = Permissions::SEND_MESSAGES.union(Permissions::EMBED_LINKS);

/// Permissions needed to post a notification in a forum thread.
pub const THREAD_REQUIRED: Permissions = Permissions::VIEW_CHANNEL
    .union(Permissions::SEND_MESSAGES_IN_THREADS)
    .union(Permissions::EMBED_LINKS);

/// Permission that allows role pings to go through.
pub const MENTION: Permissions = Permissions::MENTION_EVERYONE;

/// Inputs for computing one member's permissions in one channel.
pub struct PermissionContext<'a> {
    pub guild_id: u64,
    pub owner_id: u64,
    pub user_id: u64,
    pub member_roles: &'a [RoleId],
    pub roles: &'a HashMap<RoleId, Role>,
    pub overwrites: &'a [PermissionOverwrite],
}

/// Computes a member's effective permissions in a channel.
pub fn channel_permissions(ctx: &PermissionContext<'_>) -> Permissions {
    if ctx.user_id == ctx.owner_id {
        return Permissions::all();
    }

    let everyone = RoleId::new(ctx.guild_id);
    let mut permissions = ctx
        .roles
        .get(&everyone)
        .map(|r| r.permissions)
        .unwrap_or_else(Permissions::empty);

    for role in ctx.member_roles.iter().filter_map(|id| ctx.roles.get(id)) {
        permissions |= role.permissions;
    }

    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    for overwrite in ctx.overwrites {
        if matches!(overwrite.kind, PermissionOverwriteType::Role(id) if id == everyone) {
            permissions = apply(permissions, overwrite.allow, overwrite.deny);
        }
    }

    let mut allow = Permissions::empty();
    let mut deny = Permissions::empty();
    for overwrite in ctx.overwrites {
        if let PermissionOverwriteType::Role(id) = overwrite.kind {
            if id != everyone && ctx.member_roles.contains(&id) {
                allow |= overwrite.allow;
                deny |= overwrite.deny;
            }
        }
    }
    permissions = apply(permissions, allow, deny);

    let user = UserId::new(ctx.user_id);
    for overwrite in ctx.overwrites {
        if matches!(overwrite.kind, PermissionOverwriteType::Member(id) if id == user) {
            permissions = apply(permissions, overwrite.allow, overwrite.deny);
        }
    }

    permissions
}

fn apply(permissions: Permissions, allow: Permissions, deny: Permissions) -> Permissions {
    (permissions & !deny) | allow
}

/// Human-readable names of the `required` permissions missing from `granted`.
///
/// # Returns
/// - `Some(names)` - Comma-separated names, stable for the same missing set
/// - `None` - Nothing is missing
pub fn missing(granted: Permissions, required: Permissions) -> Option<String> {
    let missing = required - granted;
    if missing.is_empty() {
        return None;
    }

    Some(missing.get_permission_names().join(", "))
}
