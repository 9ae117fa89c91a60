//! Platform-neutral outgoing message payloads.

/// Embed attached to an outgoing message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub footer: Option<String>,
}

/// Message sent to a channel, thread or DM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub embed: Option<NotificationEmbed>,
    /// Role allowed to be pinged. When `None` the message is sent with an empty
    /// allowed-mentions list so nothing is pinged.
    pub mention_role: Option<u64>,
}

impl OutgoingMessage {
    pub fn embed(embed: NotificationEmbed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            mention_role: None,
        }
    }

    /// Adds a role ping in front of the message content.
    pub fn with_role_mention(mut self, role_id: u64) -> Self {
        let mention = format!("<@&{}>", role_id);
        self.content = Some(match self.content.take() {
            Some(content) => format!("{} {}", mention, content),
            None => mention,
        });
        self.mention_role = Some(role_id);
        self
    }
}

/// Kind of a resolved destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Announcement,
    Thread,
    Other,
}

impl ChannelKind {
    pub fn is_thread(self) -> bool {
        matches!(self, ChannelKind::Thread)
    }
}

/// A channel or thread the bot was able to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: u64,
    pub guild_id: u64,
    pub kind: ChannelKind,
    /// Parent channel for threads, used for permission overwrites.
    pub parent_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_mention_prefixes_content() {
        let message = OutgoingMessage {
            content: Some("New codes".to_string()),
            ..Default::default()
        }
        .with_role_mention(42);

        assert_eq!(message.content.as_deref(), Some("<@&42> New codes"));
        assert_eq!(message.mention_role, Some(42));
    }

    #[test]
    fn plain_embed_mentions_nobody() {
        let message = OutgoingMessage::embed(NotificationEmbed::default());

        assert!(message.content.is_none());
        assert!(message.mention_role.is_none());
    }
}
