use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000005_create_livestream_tracking_table::LivestreamTracking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LivestreamCode::Table)
                    .if_not_exists()
                    .col(pk_auto(LivestreamCode::Id))
                    .col(integer(LivestreamCode::TrackingId))
                    .col(string(LivestreamCode::Code))
                    .col(text(LivestreamCode::Title))
                    .col(big_integer_null(LivestreamCode::ExpireAt))
                    .col(
                        timestamp_with_time_zone(LivestreamCode::DiscoveredAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_livestream_code_tracking_id")
                            .from(LivestreamCode::Table, LivestreamCode::TrackingId)
                            .to(LivestreamTracking::Table, LivestreamTracking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_livestream_code_tracking_code")
                    .table(LivestreamCode::Table)
                    .col(LivestreamCode::TrackingId)
                    .col(LivestreamCode::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_livestream_code_tracking_code")
                    .table(LivestreamCode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LivestreamCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LivestreamCode {
    Table,
    Id,
    TrackingId,
    Code,
    Title,
    ExpireAt,
    DiscoveredAt,
}
