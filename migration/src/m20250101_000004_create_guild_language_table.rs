use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildLanguage::Table)
                    .if_not_exists()
                    .col(string(GuildLanguage::GuildId).primary_key())
                    .col(string(GuildLanguage::Language).default("en"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildLanguage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildLanguage {
    Table,
    GuildId,
    Language,
}
