//! Special-program code tracking.
//!
//! `tracker` polls the livestream feed for records in the Searching state and `distribution`
//! pushes a found record's codes to every guild exactly once.

pub mod distribution;
pub mod icons;
pub mod tracker;

pub use distribution::{DistributionOutcome, LivestreamDistributor};
pub use tracker::LivestreamTracker;
