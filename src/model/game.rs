//! Supported games and their per-game identifiers.

use std::fmt;

use crate::error::internal::InternalError;

/// One of the three supported titles.
///
/// Each game has several identifiers: the string id used by the code API and the
/// database, the numeric id used by the HoYoLAB livestream and event feeds, and its
/// redemption page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Game {
    Genshin,
    StarRail,
    Zenless,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Genshin, Game::StarRail, Game::Zenless];

    /// Identifier used by the code API and stored in the database.
    pub fn api_id(self) -> &'static str {
        match self {
            Game::Genshin => "genshin",
            Game::StarRail => "hkrpg",
            Game::Zenless => "nap",
        }
    }

    /// Numeric game id used by the HoYoLAB livestream and event feeds.
    pub fn hoyolab_id(self) -> u32 {
        match self {
            Game::Genshin => 2,
            Game::StarRail => 6,
            Game::Zenless => 8,
        }
    }

    /// String table key for the game's display name.
    pub fn name_key(self) -> &'static str {
        match self {
            Game::Genshin => "game.genshin",
            Game::StarRail => "game.hkrpg",
            Game::Zenless => "game.nap",
        }
    }

    /// Embed accent colour.
    pub fn color(self) -> u32 {
        match self {
            Game::Genshin => 0x5B8DEF,
            Game::StarRail => 0xB28BFF,
            Game::Zenless => 0xF5C518,
        }
    }

    /// Direct redemption link for a code.
    pub fn redeem_url(self, code: &str) -> String {
        match self {
            Game::Genshin => format!("https://genshin.hoyoverse.com/en/gift?code={}", code),
            Game::StarRail => format!("https://hsr.hoyoverse.com/gift?code={}", code),
            Game::Zenless => format!("https://zenless.hoyoverse.com/redemption?code={}", code),
        }
    }
}

impl TryFrom<&str> for Game {
    type Error = InternalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "genshin" => Ok(Game::Genshin),
            "hkrpg" => Ok(Game::StarRail),
            "nap" => Ok(Game::Zenless),
            other => Err(InternalError::UnknownGame(other.to_string())),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_id())
    }
}
