//! Serenity-backed `Messenger`.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{
        Channel, ChannelId, ChannelType, CreateAllowedMentions, CreateEmbed, CreateEmbedFooter,
        CreateMessage, EditMessage, GuildId, MessageId, Permissions, RoleId, UserId,
    },
    http::{Http, HttpError},
};
use tokio::sync::OnceCell;

use crate::{
    error::delivery::{DeliveryError, MISSING_ACCESS},
    model::message::{ChannelKind, NotificationEmbed, OutgoingMessage, ResolvedChannel},
    service::messenger::{
        permissions::{channel_permissions, PermissionContext},
        Messenger,
    },
};

/// Discord messenger backed by the bot's HTTP client.
pub struct SerenityMessenger {
    http: Arc<Http>,
    bot_id: OnceCell<UserId>,
}

impl SerenityMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            bot_id: OnceCell::new(),
        }
    }

    async fn bot_id(&self) -> Result<UserId, DeliveryError> {
        self.bot_id
            .get_or_try_init(|| async {
                let user = self.http.get_current_user().await.map_err(map_error)?;
                Ok(user.id)
            })
            .await
            .copied()
    }

    /// Fetches a channel and converts it, treating "unknown channel" as absent.
    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<serenity::all::GuildChannel>, DeliveryError> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(Channel::Guild(channel)) => Ok(Some(channel)),
            Ok(_) => Ok(None),
            Err(e) => match map_error(e) {
                DeliveryError::UnknownChannel => Ok(None),
                other => Err(other),
            },
        }
    }
}

#[async_trait]
impl Messenger for SerenityMessenger {
    async fn guild_owner(&self, guild_id: u64) -> Result<Option<u64>, DeliveryError> {
        match self.http.get_guild(GuildId::new(guild_id)).await {
            Ok(guild) => Ok(Some(guild.owner_id.get())),
            Err(e) => match map_error(e) {
                DeliveryError::UnknownGuild | DeliveryError::MissingAccess(MISSING_ACCESS) => Ok(None),
                other => Err(other),
            },
        }
    }

    async fn resolve_channel(&self, channel_id: u64) -> Result<Option<ResolvedChannel>, DeliveryError> {
        Ok(self.fetch_channel(channel_id).await?.map(|channel| ResolvedChannel {
            id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            kind: channel_kind(channel.kind),
            parent_id: channel.parent_id.map(|id| id.get()),
        }))
    }

    async fn permissions_for(&self, channel: &ResolvedChannel) -> Result<Permissions, DeliveryError> {
        let overwrite_source = match (channel.kind, channel.parent_id) {
            (ChannelKind::Thread, Some(parent_id)) => parent_id,
            _ => channel.id,
        };

        let bot_id = self.bot_id().await?;
        let guild_id = GuildId::new(channel.guild_id);

        let (guild, member, source) = tokio::try_join!(
            async { self.http.get_guild(guild_id).await.map_err(map_error) },
            async { self.http.get_member(guild_id, bot_id).await.map_err(map_error) },
            self.fetch_channel(overwrite_source),
        )?;

        let overwrites = source
            .map(|c| c.permission_overwrites)
            .unwrap_or_default();

        Ok(channel_permissions(&PermissionContext {
            guild_id: channel.guild_id,
            owner_id: guild.owner_id.get(),
            user_id: bot_id.get(),
            member_roles: &member.roles,
            roles: &guild.roles,
            overwrites: &overwrites,
        }))
    }

    async fn send(&self, channel_id: u64, message: &OutgoingMessage) -> Result<u64, DeliveryError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, create_message(message))
            .await
            .map_err(map_error)?;

        Ok(sent.id.get())
    }

    async fn send_dm(&self, user_id: u64, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        let dm = UserId::new(user_id)
            .create_dm_channel(&self.http)
            .await
            .map_err(map_error)?;

        dm.id
            .send_message(&self.http, create_message(message))
            .await
            .map_err(map_error)?;

        Ok(())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        let mut edit = EditMessage::new().content(message.content.clone().unwrap_or_default());
        if let Some(embed) = &message.embed {
            edit = edit.embed(create_embed(embed));
        }

        ChannelId::new(channel_id)
            .edit_message(&self.http, MessageId::new(message_id), edit)
            .await
            .map_err(map_error)?;

        Ok(())
    }
}

fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text => ChannelKind::Text,
        ChannelType::News => ChannelKind::Announcement,
        ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread => {
            ChannelKind::Thread
        }
        _ => ChannelKind::Other,
    }
}

/// Builds the outgoing payload. Allowed mentions are always set explicitly.
fn create_message(message: &OutgoingMessage) -> CreateMessage {
    let allowed_mentions = match message.mention_role {
        Some(role_id) => CreateAllowedMentions::new().roles(vec![RoleId::new(role_id)]),
        None => CreateAllowedMentions::new(),
    };

    let mut builder = CreateMessage::new().allowed_mentions(allowed_mentions);
    if let Some(content) = &message.content {
        builder = builder.content(content.clone());
    }
    if let Some(embed) = &message.embed {
        builder = builder.embed(create_embed(embed));
    }

    builder
}

fn create_embed(embed: &NotificationEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(embed.title.clone())
        .description(embed.description.clone())
        .color(embed.color);

    if let Some(url) = &embed.url {
        builder = builder.url(url.clone());
    }
    if let Some(image) = &embed.image_url {
        builder = builder.image(image.clone());
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer.clone()));
    }

    builder
}

/// Maps a serenity error onto the delivery error classes using the Discord JSON code.
fn map_error(err: serenity::Error) -> DeliveryError {
    match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            DeliveryError::from_code(response.error.code, response.error.message.clone())
        }
        _ => DeliveryError::Platform(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_variants_map_to_thread() {
        assert_eq!(channel_kind(ChannelType::PublicThread), ChannelKind::Thread);
        assert_eq!(channel_kind(ChannelType::PrivateThread), ChannelKind::Thread);
        assert_eq!(channel_kind(ChannelType::NewsThread), ChannelKind::Thread);
        assert_eq!(channel_kind(ChannelType::Text), ChannelKind::Text);
        assert_eq!(channel_kind(ChannelType::News), ChannelKind::Announcement);
        assert_eq!(channel_kind(ChannelType::Forum), ChannelKind::Other);
    }

    #[test]
    fn role_mention_is_the_only_allowed_mention() {
        let message = OutgoingMessage::embed(NotificationEmbed::default()).with_role_mention(42);

        let value = serde_json::to_value(create_message(&message)).unwrap();
        let mentions = &value["allowed_mentions"];

        assert!(mentions.is_object());
        assert_eq!(mentions["roles"].as_array().map(Vec::len), Some(1));
        assert!(mentions["parse"].as_array().map_or(true, |p| p.is_empty()));
    }

    #[test]
    fn plain_message_allows_no_mentions() {
        let message = OutgoingMessage::embed(NotificationEmbed::default());

        let value = serde_json::to_value(create_message(&message)).unwrap();
        let mentions = &value["allowed_mentions"];

        assert!(mentions.is_object());
        assert!(mentions["roles"].as_array().map_or(true, |r| r.is_empty()));
        assert!(mentions["parse"].as_array().map_or(true, |p| p.is_empty()));
    }
}
