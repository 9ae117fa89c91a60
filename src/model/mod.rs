//! Domain models shared by the repositories and services.
//!
//! Entity models never leave the `data` layer; repositories convert them into the types
//! defined here with `from_entity`.

pub mod code;
pub mod game;
pub mod guild;
pub mod livestream;
pub mod message;
