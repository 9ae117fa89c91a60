//! Redemption code models.

use serde::Deserialize;

use crate::{error::internal::InternalError, model::game::Game};

/// Unique key of a persisted code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeKey {
    pub game: Game,
    pub code: String,
}

impl CodeKey {
    pub fn new(game: Game, code: impl Into<String>) -> Self {
        Self {
            game,
            code: code.into(),
        }
    }
}

/// Persisted code record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub game: Game,
    pub code: String,
    pub is_expired: bool,
    /// Reward text as reported upstream, in English.
    pub reward: Option<String>,
}

impl CodeRecord {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CodeRecord)` - Converted record
    /// - `Err(InternalError::UnknownGame)` - The row references an unsupported game
    pub fn from_entity(entity: entity::redemption_code::Model) -> Result<Self, InternalError> {
        Ok(Self {
            game: Game::try_from(entity.game.as_str())?,
            code: entity.code,
            is_expired: entity.is_expired,
            reward: entity.reward,
        })
    }

    pub fn key(&self) -> CodeKey {
        CodeKey::new(self.game, self.code.clone())
    }
}

/// Status value marking an upstream entry as redeemable.
pub const STATUS_OK: &str = "OK";

/// One entry of the upstream code list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpstreamCode {
    pub code: String,
    pub status: String,
    #[serde(default)]
    pub rewards: Option<String>,
}

impl UpstreamCode {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Response body of the upstream code API.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCodeList {
    #[serde(default)]
    pub codes: Vec<UpstreamCode>,
}
