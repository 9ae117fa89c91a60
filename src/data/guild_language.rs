use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct GuildLanguageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildLanguageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every guild's language code, keyed by guild ID.
    pub async fn get_all(&self) -> Result<HashMap<u64, String>, DbErr> {
        let entities = entity::prelude::GuildLanguage::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| e.guild_id.parse::<u64>().ok().map(|id| (id, e.language)))
            .collect())
    }

    pub async fn delete(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildLanguage::delete_by_id(guild_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
