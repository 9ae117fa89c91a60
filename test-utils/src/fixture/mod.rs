//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of pure logic such as state computation and model conversion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let tracking = fixture::livestream_tracking::entity_builder()
//!     .disabled(true)
//!     .build();
//! ```

pub mod guild_config;
pub mod livestream_tracking;

pub use guild_config::entity as guild_config_entity;
pub use livestream_tracking::{
    entity as livestream_tracking_entity, entity_builder as livestream_tracking_entity_builder,
};
