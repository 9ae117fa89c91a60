//! Redemption code factory for creating persisted code records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test redemption codes.
///
/// # Example
///
/// ```rust,ignore
/// let code = RedemptionCodeFactory::new(&db)
///     .code("GENSHINGIFT")
///     .expired(true)
///     .build()
///     .await?;
/// ```
pub struct RedemptionCodeFactory<'a> {
    db: &'a DatabaseConnection,
    game: String,
    code: String,
    is_expired: bool,
    reward: Option<String>,
}

impl<'a> RedemptionCodeFactory<'a> {
    /// Creates a new RedemptionCodeFactory with default values.
    ///
    /// Defaults:
    /// - game: `"genshin"`
    /// - code: `"TESTCODE{id}"`
    /// - is_expired: `false`
    /// - reward: `Some("60 Primogem")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            game: "genshin".to_string(),
            code: format!("TESTCODE{}", next_id()),
            is_expired: false,
            reward: Some("60 Primogem".to_string()),
        }
    }

    /// Sets the game API identifier (`genshin`, `hkrpg` or `nap`).
    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn expired(mut self, is_expired: bool) -> Self {
        self.is_expired = is_expired;
        self
    }

    pub fn reward(mut self, reward: Option<&str>) -> Self {
        self.reward = reward.map(str::to_string);
        self
    }

    /// Builds and inserts the code record into the database.
    pub async fn build(self) -> Result<entity::redemption_code::Model, DbErr> {
        let now = Utc::now();
        entity::redemption_code::ActiveModel {
            game: ActiveValue::Set(self.game),
            code: ActiveValue::Set(self.code),
            is_expired: ActiveValue::Set(self.is_expired),
            reward: ActiveValue::Set(self.reward),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active redemption code for the given game.
pub async fn create_redemption_code(
    db: &DatabaseConnection,
    game: &str,
    code: &str,
) -> Result<entity::redemption_code::Model, DbErr> {
    RedemptionCodeFactory::new(db)
        .game(game)
        .code(code)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_unique_codes() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(RedemptionCode)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = RedemptionCodeFactory::new(db).build().await?;
        let second = RedemptionCodeFactory::new(db).build().await?;

        assert_ne!(first.code, second.code);
        assert_eq!(first.game, "genshin");
        assert!(!first.is_expired);

        Ok(())
    }
}
