//! Discord gateway connection.
//!
//! The bot only listens to guild lifecycle events; all outgoing traffic goes through the
//! client's HTTP handle, which is shared with the scheduled jobs via `SerenityMessenger`.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required, for `guild_delete` when the bot is removed from a server.

pub mod handler;
pub mod start;
