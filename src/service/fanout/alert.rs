//! Deduplicated owner alerts.
//!
//! Each failure condition produces at most one DM to the guild owner. The flag is written
//! before the DM goes out, so a crash between the two loses an alert rather than
//! repeating it. Flags are cleared externally when the guild re-runs setup.

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::{guild::AlertState, message::OutgoingMessage},
    service::builder::NotificationBuilder,
    state::AppState,
};

/// Alert sender for one guild during one delivery pass.
///
/// Keeps its own copy of the alert flags so repeated failures within the same pass, e.g.
/// for several games, are deduplicated without re-reading the database.
pub struct OwnerAlerts<'a> {
    state: &'a AppState,
    guild_id: u64,
    owner_id: u64,
    flags: AlertState,
}

impl<'a> OwnerAlerts<'a> {
    pub fn new(state: &'a AppState, guild_id: u64, owner_id: u64, flags: AlertState) -> Self {
        Self {
            state,
            guild_id,
            owner_id,
            flags,
        }
    }

    /// Tells the owner the notification channel is gone, unless already told.
    ///
    /// # Returns
    /// - `Ok(true)` - A DM was attempted
    /// - `Ok(false)` - Already notified, nothing sent
    /// - `Err(AppError::DbErr)` - The flag could not be stored; no DM was sent
    pub async fn channel_missing(&mut self, channel_id: u64) -> Result<bool, AppError> {
        if self.flags.channel_missing_notified {
            tracing::debug!(
                "Channel {} missing in guild {}, owner already notified",
                channel_id,
                self.guild_id
            );
            return Ok(false);
        }

        GuildConfigRepository::new(&self.state.db)
            .mark_channel_missing_notified(self.guild_id)
            .await?;
        self.flags.channel_missing_notified = true;

        let text = self.state.translator.for_guild(self.guild_id).await;
        let embed = NotificationBuilder::new(&text).channel_missing(self.guild_id, channel_id);
        self.send(OutgoingMessage::embed(embed)).await;

        Ok(true)
    }

    /// Tells the owner which permissions are missing, unless a permission alert was already sent.
    ///
    /// # Arguments
    /// - `channel_id` - Destination the permissions are missing in
    /// - `missing` - Human-readable permission names
    ///
    /// # Returns
    /// - `Ok(true)` - A DM was attempted
    /// - `Ok(false)` - Already notified about missing permissions
    /// - `Err(AppError::DbErr)` - The flag could not be stored; no DM was sent
    pub async fn permission_missing(&mut self, channel_id: u64, missing: &str) -> Result<bool, AppError> {
        if !self.flags.permission_alert_due() {
            tracing::debug!(
                "Missing {} in channel {} of guild {}, owner already notified",
                missing,
                channel_id,
                self.guild_id
            );
            return Ok(false);
        }

        GuildConfigRepository::new(&self.state.db)
            .mark_permission_missing_notified(self.guild_id, missing)
            .await?;
        self.flags.permission_missing_notified = true;
        self.flags.permission_missing = Some(missing.to_string());

        let text = self.state.translator.for_guild(self.guild_id).await;
        let embed =
            NotificationBuilder::new(&text).permission_missing(self.guild_id, channel_id, missing);
        self.send(OutgoingMessage::embed(embed)).await;

        Ok(true)
    }

    async fn send(&self, message: OutgoingMessage) {
        match self.state.messenger.send_dm(self.owner_id, &message).await {
            Ok(()) => tracing::info!(
                "Sent alert to owner {} of guild {}",
                self.owner_id,
                self.guild_id
            ),
            Err(e) => tracing::warn!(
                "Failed to DM owner {} of guild {}: {}",
                self.owner_id,
                self.guild_id,
                e
            ),
        }
    }
}
