//! HoYo Code Sender
//!
//! Discord bot that watches the HoYoverse redemption-code feeds and relays new codes to
//! every configured guild. Two scheduled pipelines drive the bot:
//! - the code reconciliation cycle, which diffs the upstream code lists against the
//!   persisted code store and fans new codes out to guild channels and forum threads
//! - the livestream tracker, which follows special-program broadcasts and distributes
//!   the codes announced during them exactly once per version

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
