use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "livestream_tracking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game: String,
    pub version: String,
    pub stream_time: Option<i64>,
    pub disabled: bool,
    pub found: bool,
    pub distributed: bool,
    pub expected_code_count: Option<i32>,
    pub tracking_channel_id: Option<String>,
    pub tracking_message_id: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::livestream_code::Entity")]
    LivestreamCode,
}

impl Related<super::livestream_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LivestreamCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
