//! SeaORM entity models for the code sender database.

pub mod prelude;

pub mod guild_config;
pub mod guild_language;
pub mod guild_settings;
pub mod livestream_code;
pub mod livestream_tracking;
pub mod redemption_code;
