//! Recording `Messenger` for tests.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serenity::all::Permissions;

use crate::{
    error::delivery::DeliveryError,
    model::message::{ChannelKind, OutgoingMessage, ResolvedChannel},
    service::messenger::{
        permissions::{CHANNEL_REQUIRED, THREAD_REQUIRED},
        Messenger,
    },
};

#[derive(Default)]
struct MockState {
    owners: HashMap<u64, u64>,
    channels: HashMap<u64, ResolvedChannel>,
    permissions: HashMap<u64, Permissions>,
    send_failures: HashMap<u64, DeliveryError>,
    sent: Vec<(u64, OutgoingMessage)>,
    dms: Vec<(u64, OutgoingMessage)>,
    edits: Vec<(u64, u64, OutgoingMessage)>,
    next_message_id: u64,
}

/// In-memory Discord stand-in.
///
/// Guilds the bot is not in, channels that were never added and channels without explicit
/// permissions behave like their Discord counterparts: no owner, unresolvable, and the
/// default posting permissions without role pings.
#[derive(Default)]
pub struct MockMessenger {
    state: Mutex<MockState>,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(self, guild_id: u64, owner_id: u64) -> Self {
        self.state.lock().unwrap().owners.insert(guild_id, owner_id);
        self
    }

    pub fn with_channel(self, guild_id: u64, channel_id: u64) -> Self {
        self.add_channel(guild_id, channel_id, ChannelKind::Text, None)
    }

    pub fn with_thread(self, guild_id: u64, thread_id: u64, parent_id: u64) -> Self {
        self.add_channel(guild_id, thread_id, ChannelKind::Thread, Some(parent_id))
    }

    pub fn with_permissions(self, channel_id: u64, permissions: Permissions) -> Self {
        self.state
            .lock()
            .unwrap()
            .permissions
            .insert(channel_id, permissions);
        self
    }

    pub fn failing_sends(self, channel_id: u64, error: DeliveryError) -> Self {
        self.state
            .lock()
            .unwrap()
            .send_failures
            .insert(channel_id, error);
        self
    }

    fn add_channel(
        self,
        guild_id: u64,
        channel_id: u64,
        kind: ChannelKind,
        parent_id: Option<u64>,
    ) -> Self {
        self.state.lock().unwrap().channels.insert(
            channel_id,
            ResolvedChannel {
                id: channel_id,
                guild_id,
                kind,
                parent_id,
            },
        );
        self
    }

    /// Every channel or thread message, in send order.
    pub fn sent(&self) -> Vec<(u64, OutgoingMessage)> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn sent_to(&self, channel_id: u64) -> Vec<OutgoingMessage> {
        self.sent()
            .into_iter()
            .filter(|(id, _)| *id == channel_id)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn dms(&self) -> Vec<(u64, OutgoingMessage)> {
        self.state.lock().unwrap().dms.clone()
    }

    pub fn edits(&self) -> Vec<(u64, u64, OutgoingMessage)> {
        self.state.lock().unwrap().edits.clone()
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn guild_owner(&self, guild_id: u64) -> Result<Option<u64>, DeliveryError> {
        Ok(self.state.lock().unwrap().owners.get(&guild_id).copied())
    }

    async fn resolve_channel(&self, channel_id: u64) -> Result<Option<ResolvedChannel>, DeliveryError> {
        Ok(self.state.lock().unwrap().channels.get(&channel_id).cloned())
    }

    async fn permissions_for(&self, channel: &ResolvedChannel) -> Result<Permissions, DeliveryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .permissions
            .get(&channel.id)
            .copied()
            .unwrap_or(CHANNEL_REQUIRED | THREAD_REQUIRED))
    }

    async fn send(&self, channel_id: u64, message: &OutgoingMessage) -> Result<u64, DeliveryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.send_failures.get(&channel_id) {
            return Err(error.clone());
        }
        if !state.channels.contains_key(&channel_id) {
            return Err(DeliveryError::UnknownChannel);
        }

        state.sent.push((channel_id, message.clone()));
        state.next_message_id += 1;

        Ok(state.next_message_id)
    }

    async fn send_dm(&self, user_id: u64, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.state
            .lock()
            .unwrap()
            .dms
            .push((user_id, message.clone()));
        Ok(())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        message: &OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        self.state
            .lock()
            .unwrap()
            .edits
            .push((channel_id, message_id, message.clone()));
        Ok(())
    }
}
