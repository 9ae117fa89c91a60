//! Livestream tracking models and the tracking state machine.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::game::Game,
    util::parse::parse_optional_u64,
};

/// Tracking record for one `(game, version)` special program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivestreamTracking {
    pub id: i32,
    pub game: Game,
    pub version: String,
    /// Stream start as a unix timestamp in seconds.
    pub stream_time: Option<i64>,
    pub disabled: bool,
    pub found: bool,
    pub distributed: bool,
    pub expected_code_count: Option<i32>,
    pub tracking_channel_id: Option<u64>,
    pub tracking_message_id: Option<u64>,
    pub banner_url: Option<String>,
}

impl LivestreamTracking {
    pub fn from_entity(entity: entity::livestream_tracking::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            game: Game::try_from(entity.game.as_str())?,
            version: entity.version,
            stream_time: entity.stream_time,
            disabled: entity.disabled,
            found: entity.found,
            distributed: entity.distributed,
            expected_code_count: entity.expected_code_count,
            tracking_channel_id: parse_optional_u64(entity.tracking_channel_id)?,
            tracking_message_id: parse_optional_u64(entity.tracking_message_id)?,
            banner_url: entity.banner_url,
        })
    }
}

/// Code discovered during a livestream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivestreamCode {
    pub code: String,
    /// Reward description in English; empty when no icon could be identified.
    pub title: String,
    pub expire_at: Option<i64>,
    pub discovered_at: DateTime<Utc>,
}

impl LivestreamCode {
    pub fn from_entity(entity: entity::livestream_code::Model) -> Self {
        Self {
            code: entity.code,
            title: entity.title,
            expire_at: entity.expire_at,
            discovered_at: entity.discovered_at,
        }
    }
}

/// Code parsed from the livestream API before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCode {
    pub code: String,
    pub title: String,
    pub expire_at: Option<i64>,
}

/// Result of parsing one livestream API response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LivestreamParse {
    pub codes: Vec<DiscoveredCode>,
    pub expected_code_count: Option<i32>,
}

/// Parameters for creating a tracking record when a special program is announced.
#[derive(Debug, Clone)]
pub struct CreateLivestreamTrackingParam {
    pub game: Game,
    pub version: String,
    pub stream_time: Option<i64>,
    pub tracking_channel_id: Option<u64>,
    pub tracking_message_id: Option<u64>,
}

/// Tracking state, computed fresh on every poll and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivestreamState {
    Disabled = 0,
    NoSchedule = 1,
    NotYetLive = 2,
    Distributed = 3,
    Searching = 4,
    Found = 5,
}

impl LivestreamState {
    /// String table key describing the state on the tracking message.
    pub fn label_key(self) -> &'static str {
        match self {
            LivestreamState::Disabled => "livestream.state.disabled",
            LivestreamState::NoSchedule => "livestream.state.no_schedule",
            LivestreamState::NotYetLive => "livestream.state.not_yet_live",
            LivestreamState::Distributed => "livestream.state.distributed",
            LivestreamState::Searching => "livestream.state.searching",
            LivestreamState::Found => "livestream.state.found",
        }
    }
}

/// Computes the tracking state of a record at `now` (unix seconds).
///
/// Priority order: disabled, no schedule, not yet live, distributed, found, searching.
pub fn compute_state(tracking: &LivestreamTracking, now: i64) -> LivestreamState {
    if tracking.disabled {
        return LivestreamState::Disabled;
    }

    let Some(stream_time) = tracking.stream_time else {
        return LivestreamState::NoSchedule;
    };

    if stream_time > now {
        LivestreamState::NotYetLive
    } else if tracking.distributed {
        LivestreamState::Distributed
    } else if tracking.found {
        LivestreamState::Found
    } else {
        LivestreamState::Searching
    }
}
