//! Redemption code repository.
//!
//! Stores the `(game, code) -> is_expired` records the reconciliation cycle diffs against.
//! Records are never deleted by the bot; expiry and reactivation only flip `is_expired`.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{
    code::{CodeKey, CodeRecord},
    game::Game,
};

use entity::redemption_code::{ActiveModel, Column};

pub struct RedemptionCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RedemptionCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every persisted code record.
    ///
    /// Rows referencing an unsupported game are skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(Vec<CodeRecord>)` - All records for supported games
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<CodeRecord>, DbErr> {
        let entities = entity::prelude::RedemptionCode::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| match CodeRecord::from_entity(e) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!("Skipping stored code: {}", err);
                    None
                }
            })
            .collect())
    }

    /// Bulk-inserts newly discovered codes as active.
    ///
    /// Keys that already exist are left untouched, so re-applying the same batch is a no-op.
    ///
    /// # Arguments
    /// - `records` - New codes; `is_expired` is forced to `false`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_new(&self, records: &[CodeRecord]) -> Result<u64, DbErr> {
        if records.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = records.iter().map(|r| ActiveModel {
            game: ActiveValue::Set(r.game.api_id().to_string()),
            code: ActiveValue::Set(r.code.clone()),
            is_expired: ActiveValue::Set(false),
            reward: ActiveValue::Set(r.reward.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        });

        entity::prelude::RedemptionCode::insert_many(models)
            .on_conflict(
                OnConflict::columns([Column::Game, Column::Code])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Marks the given codes expired.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_expired(&self, keys: &[CodeKey]) -> Result<u64, DbErr> {
        self.set_expired(keys, true).await
    }

    /// Marks the given codes active again (reactivation).
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_active(&self, keys: &[CodeKey]) -> Result<u64, DbErr> {
        self.set_expired(keys, false).await
    }

    /// Inserts or reactivates codes for one game.
    ///
    /// Used by the livestream path so codes announced on stream are visible to the regular
    /// code store and are not announced a second time by the reconciliation cycle.
    ///
    /// # Arguments
    /// - `game` - Game the codes belong to
    /// - `codes` - `(code, reward)` pairs
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted or updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_active(
        &self,
        game: Game,
        codes: &[(String, Option<String>)],
    ) -> Result<u64, DbErr> {
        if codes.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = codes.iter().map(|(code, reward)| ActiveModel {
            game: ActiveValue::Set(game.api_id().to_string()),
            code: ActiveValue::Set(code.clone()),
            is_expired: ActiveValue::Set(false),
            reward: ActiveValue::Set(reward.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        });

        entity::prelude::RedemptionCode::insert_many(models)
            .on_conflict(
                OnConflict::columns([Column::Game, Column::Code])
                    .update_columns([Column::IsExpired, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    async fn set_expired(&self, keys: &[CodeKey], is_expired: bool) -> Result<u64, DbErr> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut by_game: BTreeMap<Game, Vec<&str>> = BTreeMap::new();
        for key in keys {
            by_game.entry(key.game).or_default().push(key.code.as_str());
        }

        let condition = by_game
            .into_iter()
            .fold(Condition::any(), |cond, (game, codes)| {
                cond.add(
                    Condition::all()
                        .add(Column::Game.eq(game.api_id()))
                        .add(Column::Code.is_in(codes)),
                )
            });

        let result = entity::prelude::RedemptionCode::update_many()
            .col_expr(Column::IsExpired, Expr::value(is_expired))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(condition)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
