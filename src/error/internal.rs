use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake stored as a String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored game identifier does not match any supported game
    #[error("Unknown game identifier '{0}'")]
    UnknownGame(String),
}
