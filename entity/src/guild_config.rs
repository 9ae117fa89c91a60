use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub channel_id: String,
    pub livestream_channel_id: Option<String>,
    pub genshin_thread_id: Option<String>,
    pub hsr_thread_id: Option<String>,
    pub zzz_thread_id: Option<String>,
    pub genshin_role_id: Option<String>,
    pub hsr_role_id: Option<String>,
    pub zzz_role_id: Option<String>,
    pub channel_missing_notified: bool,
    pub channel_missing_notified_at: Option<DateTimeUtc>,
    pub permission_missing_notified: bool,
    pub permission_missing_notified_at: Option<DateTimeUtc>,
    pub permission_missing_permission: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
