use crate::{
    data::livestream::LivestreamRepository,
    error::AppError,
    model::{
        game::Game,
        livestream::{CreateLivestreamTrackingParam, DiscoveredCode},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod claim_distribution;
mod create;
mod latest_for_game;
mod record_codes;

fn discovered(code: &str) -> DiscoveredCode {
    DiscoveredCode {
        code: code.to_string(),
        title: "100 Primogem".to_string(),
        expire_at: Some(1_735_819_200),
    }
}
