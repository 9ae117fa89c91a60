use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "livestream_code")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tracking_id: i32,
    pub code: String,
    pub title: String,
    pub expire_at: Option<i64>,
    pub discovered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::livestream_tracking::Entity",
        from = "Column::TrackingId",
        to = "super::livestream_tracking::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LivestreamTracking,
}

impl Related<super::livestream_tracking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LivestreamTracking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
