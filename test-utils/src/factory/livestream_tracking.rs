//! Livestream tracking factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test livestream tracking records.
///
/// Defaults to a Genshin record whose stream started an hour ago, with no codes found,
/// so the computed state is Searching.
pub struct LivestreamTrackingFactory<'a> {
    db: &'a DatabaseConnection,
    game: String,
    version: String,
    stream_time: Option<i64>,
    disabled: bool,
    found: bool,
    distributed: bool,
    tracking_channel_id: Option<String>,
    tracking_message_id: Option<String>,
}

impl<'a> LivestreamTrackingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            game: "genshin".to_string(),
            version: format!("5.{}", next_id()),
            stream_time: Some(Utc::now().timestamp() - 3600),
            disabled: false,
            found: false,
            distributed: false,
            tracking_channel_id: None,
            tracking_message_id: None,
        }
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the stream start as a unix timestamp in seconds.
    pub fn stream_time(mut self, stream_time: Option<i64>) -> Self {
        self.stream_time = stream_time;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn found(mut self, found: bool) -> Self {
        self.found = found;
        self
    }

    pub fn distributed(mut self, distributed: bool) -> Self {
        self.distributed = distributed;
        self
    }

    /// Sets the companion tracking message location.
    pub fn tracking_message(mut self, channel_id: &str, message_id: &str) -> Self {
        self.tracking_channel_id = Some(channel_id.to_string());
        self.tracking_message_id = Some(message_id.to_string());
        self
    }

    /// Builds and inserts the tracking record into the database.
    pub async fn build(self) -> Result<entity::livestream_tracking::Model, DbErr> {
        let now = Utc::now();
        entity::livestream_tracking::ActiveModel {
            id: ActiveValue::NotSet,
            game: ActiveValue::Set(self.game),
            version: ActiveValue::Set(self.version),
            stream_time: ActiveValue::Set(self.stream_time),
            disabled: ActiveValue::Set(self.disabled),
            found: ActiveValue::Set(self.found),
            distributed: ActiveValue::Set(self.distributed),
            expected_code_count: ActiveValue::Set(None),
            tracking_channel_id: ActiveValue::Set(self.tracking_channel_id),
            tracking_message_id: ActiveValue::Set(self.tracking_message_id),
            banner_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a searching livestream tracking record for the given game.
pub async fn create_livestream_tracking(
    db: &DatabaseConnection,
    game: &str,
) -> Result<entity::livestream_tracking::Model, DbErr> {
    LivestreamTrackingFactory::new(db).game(game).build().await
}
