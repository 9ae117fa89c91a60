use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub auto_send_enabled: bool,
    pub auto_send_channel: Option<bool>,
    pub auto_send_threads: Option<bool>,
    pub favorite_games_enabled: bool,
    pub favorite_genshin: Option<bool>,
    pub favorite_hkrpg: Option<bool>,
    pub favorite_nap: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
