//! Service layer for business logic and orchestration.
//!
//! Services sit between the scheduler and bot event handlers on one side and the
//! repository layer on the other. They coordinate repository calls with the upstream
//! feeds and the chat platform, and work with domain models rather than entities.
//!
//! - `reconciliation` - code diffing cycle and new-code notification
//! - `livestream` - special-program tracking and exactly-once distribution
//! - `fanout` - per-guild delivery, owner alerts and the batch runner
//! - `messenger` - the seam to Discord
//! - `i18n` - string tables and the guild language cache
//! - `upstream` - HTTP clients for the code, livestream and event feeds

pub mod builder;
pub mod fanout;
pub mod guild;
pub mod i18n;
pub mod livestream;
pub mod messenger;
pub mod reconciliation;
pub mod upstream;
