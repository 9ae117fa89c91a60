//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects with a permission bitset

pub mod role;

pub use role::create_test_role;
