use crate::{
    data::redemption_code::RedemptionCodeRepository,
    error::AppError,
    model::{
        code::{CodeKey, CodeRecord},
        game::Game,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod insert_new;
mod mark_active;
mod mark_expired;
mod upsert_active;

fn record(game: Game, code: &str) -> CodeRecord {
    CodeRecord {
        game,
        code: code.to_string(),
        is_expired: false,
        reward: Some("60 Primogem".to_string()),
    }
}

async fn stored(
    db: &sea_orm::DatabaseConnection,
    game: &str,
    code: &str,
) -> Result<Option<entity::redemption_code::Model>, AppError> {
    Ok(
        entity::prelude::RedemptionCode::find_by_id((game.to_string(), code.to_string()))
            .one(db)
            .await?,
    )
}
