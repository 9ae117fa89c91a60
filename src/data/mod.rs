//! Database repository layer.
//!
//! Repositories own every query. They use SeaORM entity models internally and return the
//! domain models from `crate::model`, so services never touch entities directly.

pub mod guild_config;
pub mod guild_language;
pub mod guild_settings;
pub mod livestream;
pub mod redemption_code;

#[cfg(test)]
mod test;
