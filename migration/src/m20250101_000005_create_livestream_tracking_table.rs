use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LivestreamTracking::Table)
                    .if_not_exists()
                    .col(pk_auto(LivestreamTracking::Id))
                    .col(string(LivestreamTracking::Game))
                    .col(string(LivestreamTracking::Version))
                    .col(big_integer_null(LivestreamTracking::StreamTime))
                    .col(boolean(LivestreamTracking::Disabled).default(false))
                    .col(boolean(LivestreamTracking::Found).default(false))
                    .col(boolean(LivestreamTracking::Distributed).default(false))
                    .col(integer_null(LivestreamTracking::ExpectedCodeCount))
                    .col(string_null(LivestreamTracking::TrackingChannelId))
                    .col(string_null(LivestreamTracking::TrackingMessageId))
                    .col(text_null(LivestreamTracking::BannerUrl))
                    .col(
                        timestamp_with_time_zone(LivestreamTracking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(LivestreamTracking::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_livestream_tracking_game_version")
                    .table(LivestreamTracking::Table)
                    .col(LivestreamTracking::Game)
                    .col(LivestreamTracking::Version)
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
                    .name("idx_livestream_tracking_game_version")
                    .table(LivestreamTracking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LivestreamTracking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LivestreamTracking {
    Table,
    Id,
    Game,
    Version,
    StreamTime,
    Disabled,
    Found,
    Distributed,
    ExpectedCodeCount,
    TrackingChannelId,
    TrackingMessageId,
    BannerUrl,
    CreatedAt,
    UpdatedAt,
}
