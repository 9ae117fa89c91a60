//! Livestream tracking fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::livestream_tracking;

/// Default stream time used by fixtures (2025-01-01T12:00:00Z).
pub const DEFAULT_STREAM_TIME: i64 = 1_735_732_800;

/// Creates a livestream tracking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - game: `"genshin"`, version: `"5.4"`
/// - stream_time: `DEFAULT_STREAM_TIME`
/// - all flags `false`
pub fn entity() -> livestream_tracking::Model {
    entity_builder().build()
}

/// Creates a livestream tracking entity builder for customization.
pub fn entity_builder() -> LivestreamTrackingEntityBuilder {
    LivestreamTrackingEntityBuilder::default()
}

/// Builder for creating customized livestream tracking entity models.
pub struct LivestreamTrackingEntityBuilder {
    model: livestream_tracking::Model,
}

impl Default for LivestreamTrackingEntityBuilder {
    fn default() -> Self {
        let created = Utc
            .timestamp_opt(DEFAULT_STREAM_TIME - 86_400, 0)
            .single()
            .unwrap_or_default();
        Self {
            model: livestream_tracking::Model {
                id: 1,
                game: "genshin".to_string(),
                version: "5.4".to_string(),
                stream_time: Some(DEFAULT_STREAM_TIME),
                disabled: false,
                found: false,
                distributed: false,
                expected_code_count: None,
                tracking_channel_id: None,
                tracking_message_id: None,
                banner_url: None,
                created_at: created,
                updated_at: created,
            },
        }
    }
}

impl LivestreamTrackingEntityBuilder {
    pub fn game(mut self, game: &str) -> Self {
        self.model.game = game.to_string();
        self
    }

    pub fn stream_time(mut self, stream_time: Option<i64>) -> Self {
        self.model.stream_time = stream_time;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.model.disabled = disabled;
        self
    }

    pub fn found(mut self, found: bool) -> Self {
        self.model.found = found;
        self
    }

    pub fn distributed(mut self, distributed: bool) -> Self {
        self.model.distributed = distributed;
        self
    }

    pub fn build(self) -> livestream_tracking::Model {
        self.model
    }
}
