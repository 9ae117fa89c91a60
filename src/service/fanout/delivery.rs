//! Per-guild delivery to the notification channel and forum threads.
//!
//! The channel and the per-game thread are independent targets: a failure on one never
//! stops the other. Platform errors that mean "missing access" or "unknown channel" are
//! routed to the deduplicated owner alerts.

use serenity::all::Permissions;

use crate::{
    error::{delivery::DeliveryError, AppError},
    model::{
        game::Game,
        guild::{GuildConfig, GuildTarget},
        message::OutgoingMessage,
    },
    service::{
        fanout::alert::OwnerAlerts,
        guild::GuildService,
        messenger::permissions::{self, CHANNEL_REQUIRED, MENTION, THREAD_REQUIRED},
    },
    state::AppState,
};

/// Which configured channel a delivery goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The main notification channel.
    Codes,
    /// The livestream channel, falling back to the main channel.
    Livestream,
}

impl Destination {
    pub fn channel_for(self, config: &GuildConfig) -> u64 {
        match self {
            Destination::Codes => config.channel_id,
            Destination::Livestream => config.livestream_channel_id.unwrap_or(config.channel_id),
        }
    }
}

/// What happened for one guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildDelivery {
    pub channel_sends: usize,
    pub thread_sends: usize,
    /// The bot is no longer in the guild and its records were deleted.
    pub removed: bool,
}

/// Resolved, permission-checked notification channel.
struct OpenChannel {
    id: u64,
    can_mention: bool,
}

pub struct GuildDeliverer<'a> {
    state: &'a AppState,
}

impl<'a> GuildDeliverer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Delivers one message per game to a guild's channel and forum threads.
    ///
    /// Games the guild filtered out are dropped first; if nothing is left the guild is not
    /// contacted at all. A guild the bot has left is cleaned up instead of delivered to.
    ///
    /// # Arguments
    /// - `target` - Guild config and resolved delivery preferences
    /// - `destination` - Which configured channel to use
    /// - `messages` - Localized message per game, without role mention
    ///
    /// # Returns
    /// - `Ok(GuildDelivery)` - Counts of successful sends, or the removal marker
    /// - `Err(AppError)` - Guild lookup failed or an alert flag could not be stored
    pub async fn deliver(
        &self,
        target: GuildTarget,
        destination: Destination,
        messages: Vec<(Game, OutgoingMessage)>,
    ) -> Result<GuildDelivery, AppError> {
        let GuildTarget { config, prefs } = target;
        let guild_id = config.guild_id;

        let messages: Vec<_> = messages
            .into_iter()
            .filter(|(game, _)| prefs.allows(*game))
            .collect();
        if messages.is_empty() {
            return Ok(GuildDelivery::default());
        }

        let Some(owner_id) = self.state.messenger.guild_owner(guild_id).await? else {
            tracing::info!("Bot is no longer in guild {}, cleaning up", guild_id);
            GuildService::new(&self.state.db, &self.state.languages)
                .cleanup(guild_id)
                .await?;
            return Ok(GuildDelivery {
                removed: true,
                ..Default::default()
            });
        };

        let mut alerts = OwnerAlerts::new(self.state, guild_id, owner_id, config.alerts.clone());
        let mut delivery = GuildDelivery::default();

        let mut channel = if prefs.to_channel {
            self.open_channel(&mut alerts, destination.channel_for(&config))
                .await?
        } else {
            None
        };

        for (game, message) in messages {
            if let Some((channel_id, can_mention)) = channel.as_ref().map(|c| (c.id, c.can_mention)) {
                let outgoing = with_role(&message, config.role_for(game), can_mention);
                match self.state.messenger.send(channel_id, &outgoing).await {
                    Ok(_) => delivery.channel_sends += 1,
                    Err(e) => {
                        self.handle_send_error(&mut alerts, guild_id, channel_id, CHANNEL_REQUIRED, e)
                            .await?;
                        channel = None;
                    }
                }
            }

            if prefs.to_threads {
                if let Some(thread_id) = config.thread_for(game) {
                    if self
                        .send_to_thread(&mut alerts, guild_id, thread_id, &message, config.role_for(game))
                        .await?
                    {
                        delivery.thread_sends += 1;
                    }
                }
            }
        }

        tracing::debug!(
            "Guild {}: {} channel and {} thread messages sent",
            guild_id,
            delivery.channel_sends,
            delivery.thread_sends
        );

        Ok(delivery)
    }

    /// Resolves the channel and checks send and embed permissions.
    ///
    /// # Returns
    /// - `Ok(Some(OpenChannel))` - Channel is usable
    /// - `Ok(None)` - Channel is missing or forbidden; the owner was alerted if due
    async fn open_channel(
        &self,
        alerts: &mut OwnerAlerts<'_>,
        channel_id: u64,
    ) -> Result<Option<OpenChannel>, AppError> {
        let messenger = &self.state.messenger;

        let channel = match messenger.resolve_channel(channel_id).await {
            Ok(Some(channel)) => channel,
            Ok(None) | Err(DeliveryError::UnknownChannel) => {
                alerts.channel_missing(channel_id).await?;
                return Ok(None);
            }
            Err(DeliveryError::MissingAccess(_)) => {
                let missing = permissions::missing(Permissions::empty(), Permissions::VIEW_CHANNEL)
                    .unwrap_or_default();
                alerts.permission_missing(channel_id, &missing).await?;
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!("Failed to resolve channel {}: {}", channel_id, e);
                return Ok(None);
            }
        };

        let granted = match messenger.permissions_for(&channel).await {
            Ok(granted) => granted,
            Err(e) => {
                tracing::warn!("Failed to compute permissions in channel {}: {}", channel_id, e);
                return Ok(None);
            }
        };

        if let Some(missing) = permissions::missing(granted, CHANNEL_REQUIRED) {
            alerts.permission_missing(channel_id, &missing).await?;
            return Ok(None);
        }

        Ok(Some(OpenChannel {
            id: channel.id,
            can_mention: granted.contains(MENTION),
        }))
    }

    /// Sends to a forum thread after checking it is a thread the bot can post in.
    ///
    /// # Returns
    /// - `Ok(true)` - Message sent
    /// - `Ok(false)` - Thread missing, forbidden or the send failed
    async fn send_to_thread(
        &self,
        alerts: &mut OwnerAlerts<'_>,
        guild_id: u64,
        thread_id: u64,
        message: &OutgoingMessage,
        role: Option<u64>,
    ) -> Result<bool, AppError> {
        let messenger = &self.state.messenger;

        let thread = match messenger.resolve_thread(thread_id).await {
            Ok(Some(thread)) => thread,
            Ok(None) => {
                tracing::debug!("Thread {} in guild {} is missing or not a thread", thread_id, guild_id);
                return Ok(false);
            }
            Err(e) => {
                self.handle_send_error(alerts, guild_id, thread_id, THREAD_REQUIRED, e)
                    .await?;
                return Ok(false);
            }
        };

        let granted = match messenger.permissions_for(&thread).await {
            Ok(granted) => granted,
            Err(e) => {
                tracing::warn!("Failed to compute permissions in thread {}: {}", thread_id, e);
                return Ok(false);
            }
        };

        if let Some(missing) = permissions::missing(granted, THREAD_REQUIRED) {
            tracing::debug!("Missing {} in thread {} of guild {}", missing, thread_id, guild_id);
            return Ok(false);
        }

        let outgoing = with_role(message, role, granted.contains(MENTION));
        match messenger.send(thread_id, &outgoing).await {
            Ok(_) => Ok(true),
            Err(e) => {
                self.handle_send_error(alerts, guild_id, thread_id, THREAD_REQUIRED, e)
                    .await?;
                Ok(false)
            }
        }
    }

    async fn handle_send_error(
        &self,
        alerts: &mut OwnerAlerts<'_>,
        guild_id: u64,
        channel_id: u64,
        required: Permissions,
        error: DeliveryError,
    ) -> Result<(), AppError> {
        match error {
            DeliveryError::MissingAccess(_) => {
                let missing = permissions::missing(Permissions::empty(), required)
                    .unwrap_or_default();
                alerts.permission_missing(channel_id, &missing).await?;
            }
            DeliveryError::UnknownChannel => {
                alerts.channel_missing(channel_id).await?;
            }
            other => {
                tracing::warn!(
                    "Failed to send to {} in guild {}: {}",
                    channel_id,
                    guild_id,
                    other
                );
            }
        }

        Ok(())
    }
}

/// Adds the role mention only when a role is configured and pings would go through.
fn with_role(message: &OutgoingMessage, role: Option<u64>, can_mention: bool) -> OutgoingMessage {
    match role {
        Some(role_id) if can_mention => message.clone().with_role_mention(role_id),
        _ => message.clone(),
    }
}
