//! Chat platform failures surfaced while delivering notifications.

use thiserror::Error;

/// Discord JSON error code for "Missing Access".
pub const MISSING_ACCESS: isize = 50001;
/// Discord JSON error code for "Missing Permissions".
pub const MISSING_PERMISSIONS: isize = 50013;
/// Discord JSON error code for "Unknown Channel".
pub const UNKNOWN_CHANNEL: isize = 10003;
/// Discord JSON error code for "Unknown Guild".
pub const UNKNOWN_GUILD: isize = 10004;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The bot lacks access or permissions for the destination.
    ///
    /// Routed to the deduplicated permission alert.
    #[error("Missing access to destination (Discord code {0})")]
    MissingAccess(isize),

    /// The destination channel or thread no longer exists.
    ///
    /// Routed to the deduplicated channel-missing alert.
    #[error("Unknown channel")]
    UnknownChannel,

    /// The guild no longer exists or the bot is no longer a member.
    #[error("Unknown guild")]
    UnknownGuild,

    /// Any other platform failure. Logged and skipped.
    #[error("Platform error: {0}")]
    Platform(String),
}

impl DeliveryError {
    /// Maps a Discord JSON error code onto a delivery error.
    ///
    /// # Arguments
    /// - `code` - JSON error code from the Discord response body
    /// - `message` - Human-readable error text used for the `Platform` fallback
    pub fn from_code(code: isize, message: impl Into<String>) -> Self {
        match code {
            MISSING_ACCESS | MISSING_PERMISSIONS => DeliveryError::MissingAccess(code),
            UNKNOWN_CHANNEL => DeliveryError::UnknownChannel,
            UNKNOWN_GUILD => DeliveryError::UnknownGuild,
            _ => DeliveryError::Platform(message.into()),
        }
    }
}
