//! Ready event handler.
//!
//! Fired once per gateway connection after authentication. Logs the connection and sets
//! the bot's presence.

use serenity::all::{ActivityData, Context, Ready};

/// Presence text shown under the bot's name.
pub const ACTIVITY: &str = "Watching for new HoYo codes";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom(ACTIVITY)));
}
