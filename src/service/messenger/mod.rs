//! The seam between the bot and Discord.
//!
//! Everything the core needs from the chat platform goes through the `Messenger` trait:
//! resolving destinations, checking the bot's permissions in them, sending channel messages
//! and owner DMs. `SerenityMessenger` is the production implementation; tests use the
//! recording `MockMessenger`.

#[cfg(test)]
pub mod mock;
pub mod permissions;
pub mod discord;

use async_trait::async_trait;
use serenity::all::Permissions;

use crate::{
    error::delivery::DeliveryError,
    model::message::{OutgoingMessage, ResolvedChannel},
};

pub use discord::SerenityMessenger;

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Gets the owner of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(owner_id))` - The bot is a member of the guild
    /// - `Ok(None)` - The guild is gone or the bot is no longer a member
    /// - `Err(DeliveryError)` - Any other platform failure
    async fn guild_owner(&self, guild_id: u64) -> Result<Option<u64>, DeliveryError>;

    /// Resolves a guild channel or thread by ID.
    ///
    /// # Returns
    /// - `Ok(Some(channel))` - The destination exists
    /// - `Ok(None)` - The destination was deleted or is not a guild channel
    /// - `Err(DeliveryError)` - The lookup failed, e.g. missing access
    async fn resolve_channel(&self, channel_id: u64) -> Result<Option<ResolvedChannel>, DeliveryError>;

    /// Resolves a destination and only returns it if it is a thread.
    async fn resolve_thread(&self, thread_id: u64) -> Result<Option<ResolvedChannel>, DeliveryError> {
        Ok(self
            .resolve_channel(thread_id)
            .await?
            .filter(|channel| channel.kind.is_thread()))
    }

    /// Computes the bot's effective permissions in a destination.
    async fn permissions_for(&self, channel: &ResolvedChannel) -> Result<Permissions, DeliveryError>;

    /// Sends a message to a channel or thread.
    ///
    /// Implementations must restrict allowed mentions to `message.mention_role`.
    ///
    /// # Returns
    /// - `Ok(message_id)` - ID of the created message
    async fn send(&self, channel_id: u64, message: &OutgoingMessage) -> Result<u64, DeliveryError>;

    /// Sends a direct message to a user.
    async fn send_dm(&self, user_id: u64, message: &OutgoingMessage) -> Result<(), DeliveryError>;

    /// Replaces the content and embed of an existing message.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError>;
}
