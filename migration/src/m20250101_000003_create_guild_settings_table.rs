use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(string(GuildSettings::GuildId).primary_key())
                    .col(boolean(GuildSettings::AutoSendEnabled).default(true))
                    .col(boolean_null(GuildSettings::AutoSendChannel))
                    .col(boolean_null(GuildSettings::AutoSendThreads))
                    .col(boolean(GuildSettings::FavoriteGamesEnabled).default(false))
                    .col(boolean_null(GuildSettings::FavoriteGenshin))
                    .col(boolean_null(GuildSettings::FavoriteHkrpg))
                    .col(boolean_null(GuildSettings::FavoriteNap))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildSettings {
    Table,
    GuildId,
    AutoSendEnabled,
    AutoSendChannel,
    AutoSendThreads,
    FavoriteGamesEnabled,
    FavoriteGenshin,
    FavoriteHkrpg,
    FavoriteNap,
}
