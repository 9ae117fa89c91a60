pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_redemption_code_table;
mod m20250101_000002_create_guild_config_table;
mod m20250101_000003_create_guild_settings_table;
mod m20250101_000004_create_guild_language_table;
mod m20250101_000005_create_livestream_tracking_table;
mod m20250101_000006_create_livestream_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_redemption_code_table::Migration),
            Box::new(m20250101_000002_create_guild_config_table::Migration),
            Box::new(m20250101_000003_create_guild_settings_table::Migration),
            Box::new(m20250101_000004_create_guild_language_table::Migration),
            Box::new(m20250101_000005_create_livestream_tracking_table::Migration),
            Box::new(m20250101_000006_create_livestream_code_table::Migration),
        ]
    }
}
