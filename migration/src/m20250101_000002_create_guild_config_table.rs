use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(string(GuildConfig::GuildId).primary_key())
                    .col(string(GuildConfig::ChannelId))
                    .col(string_null(GuildConfig::LivestreamChannelId))
                    .col(string_null(GuildConfig::GenshinThreadId))
                    .col(string_null(GuildConfig::HsrThreadId))
                    .col(string_null(GuildConfig::ZzzThreadId))
                    .col(string_null(GuildConfig::GenshinRoleId))
                    .col(string_null(GuildConfig::HsrRoleId))
                    .col(string_null(GuildConfig::ZzzRoleId))
                    .col(boolean(GuildConfig::ChannelMissingNotified).default(false))
                    .col(timestamp_with_time_zone_null(
                        GuildConfig::ChannelMissingNotifiedAt,
                    ))
                    .col(boolean(GuildConfig::PermissionMissingNotified).default(false))
                    .col(timestamp_with_time_zone_null(
                        GuildConfig::PermissionMissingNotifiedAt,
                    ))
                    .col(string_null(GuildConfig::PermissionMissingPermission))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildConfig {
    Table,
    GuildId,
    ChannelId,
    LivestreamChannelId,
    GenshinThreadId,
    HsrThreadId,
    ZzzThreadId,
    GenshinRoleId,
    HsrRoleId,
    ZzzRoleId,
    ChannelMissingNotified,
    ChannelMissingNotifiedAt,
    PermissionMissingNotified,
    PermissionMissingNotifiedAt,
    PermissionMissingPermission,
}
