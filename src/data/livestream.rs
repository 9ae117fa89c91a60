//! Livestream tracking repository.
//!
//! One tracking record exists per `(game, version)`. The tracker appends discovered codes
//! and flips `found`; distribution claims the record with a compare-and-swap on
//! `distributed` so only one caller ever fans a version out.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::{
        game::Game,
        livestream::{
            CreateLivestreamTrackingParam, DiscoveredCode, LivestreamCode, LivestreamTracking,
        },
    },
};

use entity::{livestream_code, livestream_tracking};

pub struct LivestreamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LivestreamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tracking record for a newly announced special program.
    ///
    /// # Arguments
    /// - `param` - Game, version, stream time and optional tracking message location
    ///
    /// # Returns
    /// - `Ok(LivestreamTracking)` - Created record with all flags cleared
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate `(game, version)`
    pub async fn create(
        &self,
        param: CreateLivestreamTrackingParam,
    ) -> Result<LivestreamTracking, AppError> {
        let now = Utc::now();
        let entity = livestream_tracking::ActiveModel {
            id: ActiveValue::NotSet,
            game: ActiveValue::Set(param.game.api_id().to_string()),
            version: ActiveValue::Set(param.version),
            stream_time: ActiveValue::Set(param.stream_time),
            disabled: ActiveValue::Set(false),
            found: ActiveValue::Set(false),
            distributed: ActiveValue::Set(false),
            expected_code_count: ActiveValue::Set(None),
            tracking_channel_id: ActiveValue::Set(param.tracking_channel_id.map(|id| id.to_string())),
            tracking_message_id: ActiveValue::Set(param.tracking_message_id.map(|id| id.to_string())),
            banner_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        LivestreamTracking::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<LivestreamTracking>, AppError> {
        let entity = entity::prelude::LivestreamTracking::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(LivestreamTracking::from_entity).transpose()
    }

    /// Gets the most recently created tracking record for a game.
    ///
    /// # Returns
    /// - `Ok(Some(LivestreamTracking))` - Latest record for the game
    /// - `Ok(None)` - The game has never been tracked
    /// - `Err(AppError)` - Database error or malformed row
    pub async fn latest_for_game(&self, game: Game) -> Result<Option<LivestreamTracking>, AppError> {
        let entity = entity::prelude::LivestreamTracking::find()
            .filter(livestream_tracking::Column::Game.eq(game.api_id()))
            .order_by_desc(livestream_tracking::Column::CreatedAt)
            .order_by_desc(livestream_tracking::Column::Id)
            .one(self.db)
            .await?;

        entity.map(LivestreamTracking::from_entity).transpose()
    }

    /// Gets the codes discovered for a tracking record, in discovery order.
    pub async fn get_codes(&self, tracking_id: i32) -> Result<Vec<LivestreamCode>, DbErr> {
        let entities = entity::prelude::LivestreamCode::find()
            .filter(livestream_code::Column::TrackingId.eq(tracking_id))
            .order_by_asc(livestream_code::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LivestreamCode::from_entity).collect())
    }

    /// Stores discovered codes and marks the record found.
    ///
    /// Codes already stored for the record are ignored. `found` is set once at least one
    /// code has been recorded; the expected count is kept for the tracking message and logs.
    ///
    /// # Arguments
    /// - `tracking_id` - Tracking record the codes belong to
    /// - `codes` - Codes parsed from the livestream API
    /// - `expected_code_count` - Count advertised by the API, if any
    ///
    /// # Returns
    /// - `Ok(())` - Codes stored and flags updated
    /// - `Err(DbErr)` - Database error
    pub async fn record_codes(
        &self,
        tracking_id: i32,
        codes: &[DiscoveredCode],
        expected_code_count: Option<i32>,
    ) -> Result<(), DbErr> {
        if !codes.is_empty() {
            let now = Utc::now();
            let models = codes.iter().map(|c| livestream_code::ActiveModel {
                id: ActiveValue::NotSet,
                tracking_id: ActiveValue::Set(tracking_id),
                code: ActiveValue::Set(c.code.clone()),
                title: ActiveValue::Set(c.title.clone()),
                expire_at: ActiveValue::Set(c.expire_at),
                discovered_at: ActiveValue::Set(now),
            });

            entity::prelude::LivestreamCode::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        livestream_code::Column::TrackingId,
                        livestream_code::Column::Code,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        let mut update = entity::prelude::LivestreamTracking::update_many()
            .col_expr(livestream_tracking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(livestream_tracking::Column::Id.eq(tracking_id));

        if !codes.is_empty() {
            update = update.col_expr(livestream_tracking::Column::Found, Expr::value(true));
        }
        if let Some(expected) = expected_code_count {
            update = update.col_expr(
                livestream_tracking::Column::ExpectedCodeCount,
                Expr::value(expected),
            );
        }

        update.exec(self.db).await?;

        Ok(())
    }

    /// Atomically claims a record for distribution.
    ///
    /// Flips `distributed` from `false` to `true` in a single conditional update. Exactly
    /// one concurrent caller observes `true`; everyone else must not fan out.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller won the claim and must distribute
    /// - `Ok(false)` - The record was already distributed or does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim_distribution(&self, tracking_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LivestreamTracking::update_many()
            .col_expr(livestream_tracking::Column::Distributed, Expr::value(true))
            .col_expr(livestream_tracking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(livestream_tracking::Column::Id.eq(tracking_id))
            .filter(livestream_tracking::Column::Distributed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn set_banner_url(&self, tracking_id: i32, banner_url: &str) -> Result<(), DbErr> {
        entity::prelude::LivestreamTracking::update_many()
            .col_expr(
                livestream_tracking::Column::BannerUrl,
                Expr::value(banner_url.to_string()),
            )
            .col_expr(livestream_tracking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(livestream_tracking::Column::Id.eq(tracking_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
