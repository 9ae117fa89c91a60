use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RedemptionCode::Table)
                    .if_not_exists()
                    .col(string(RedemptionCode::Game))
                    .col(string(RedemptionCode::Code))
                    .col(boolean(RedemptionCode::IsExpired).default(false))
                    .col(text_null(RedemptionCode::Reward))
                    .col(
                        timestamp_with_time_zone(RedemptionCode::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RedemptionCode::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(RedemptionCode::Game)
                            .col(RedemptionCode::Code),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RedemptionCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RedemptionCode {
    Table,
    Game,
    Code,
    IsExpired,
    Reward,
    CreatedAt,
    UpdatedAt,
}
