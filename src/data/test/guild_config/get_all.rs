use super::*;

/// Tests loading all guild configs.
///
/// Verifies snowflakes are parsed and per-game threads and roles are mapped.
///
/// Expected: Ok with both configs
#[tokio::test]
async fn returns_parsed_configs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_config::GuildConfigFactory::new(db)
        .genshin_thread_id(Some("1001"))
        .zzz_role_id(Some("2002"))
        .build()
        .await?;
    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert_eq!(configs.len(), 2);
    let config = configs
        .iter()
        .find(|c| c.guild_id.to_string() == first.guild_id)
        .unwrap();
    assert_eq!(config.thread_for(Game::Genshin), Some(1001));
    assert_eq!(config.role_for(Game::Zenless), Some(2002));

    Ok(())
}

/// Tests that a malformed row does not fail the whole load.
///
/// Expected: Ok with only the valid config
#[tokio::test]
async fn skips_malformed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .channel_id("not-a-snowflake")
        .build()
        .await?;
    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert_eq!(configs.len(), 1);

    Ok(())
}
