//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert into the
//! database; use `crate::fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(&db).await?;
//! let code = factory::redemption_code::RedemptionCodeFactory::new(&db)
//!     .game("hkrpg")
//!     .code("STARRAILGIFT")
//!     .expired(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Notification destinations and alert flags
//! - `guild_settings` - Auto-send and favorite-game preferences
//! - `guild_language` - Guild language selection
//! - `redemption_code` - Persisted code records
//! - `livestream_tracking` - Livestream tracking records
//! - `helpers` - ID generation and multi-row helpers

pub mod guild_config;
pub mod guild_language;
pub mod guild_settings;
pub mod helpers;
pub mod livestream_tracking;
pub mod redemption_code;

pub use guild_config::create_guild_config;
pub use guild_language::create_guild_language;
pub use guild_settings::create_guild_settings;
pub use livestream_tracking::create_livestream_tracking;
pub use redemption_code::create_redemption_code;
