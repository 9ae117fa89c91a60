use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    service::{
        i18n::{LanguageCache, Translator},
        livestream::icons::IconMap,
        upstream::UpstreamClient,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the upstream HTTP client with the configured per-request timeout.
pub fn setup_upstream_client(config: &Config) -> Result<UpstreamClient, AppError> {
    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .user_agent(concat!("hoyo-code-sender/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(UpstreamClient::new(
        http,
        config.codes_api_url.clone(),
        config.livestream_api_url.clone(),
        config.events_api_url.clone(),
    ))
}

/// Creates the language cache and loads the string tables.
///
/// # Returns
/// - `Ok((languages, translator))` - Shared cache and translator backed by it
/// - `Err(AppError)` - A table in `LOCALES_DIR` could not be read or parsed
pub fn setup_translator(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<(Arc<LanguageCache>, Arc<Translator>), AppError> {
    let languages = Arc::new(LanguageCache::new(db.clone(), config.language_cache_ttl));
    let mut translator = Translator::new(languages.clone())?;

    if let Some(dir) = &config.locales_dir {
        translator.load_dir(dir)?;
    }

    Ok((languages, Arc::new(translator)))
}

/// Loads the built-in livestream icon map, extended by the configured file if any.
pub fn setup_icon_map(config: &Config) -> Result<IconMap, AppError> {
    let mut icons = IconMap::embedded()?;

    if let Some(path) = &config.livestream_icon_map {
        icons.extend_from_file(path)?;
    }

    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: built-in reward names available without an icon map file
    #[test]
    fn icon_map_defaults_to_embedded_table() {
        let config = Config::from_lookup(|name| match name {
            "DISCORD_BOT_TOKEN" => Some("token".to_string()),
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            _ => None,
        })
        .unwrap();

        let icons = setup_icon_map(&config).unwrap();

        assert_eq!(
            icons.describe([("https://cdn.example/primogem.png", 60)]),
            "60 Primogem"
        );
    }
}
