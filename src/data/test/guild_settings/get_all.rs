use super::*;

/// Tests that settings rows are resolved into delivery preferences.
///
/// Expected: Ok with defaults applied and favorites honoured
#[tokio::test]
async fn resolves_preferences() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, "111")
        .auto_send_threads(Some(false))
        .favorites(Some(true), Some(false), None)
        .build()
        .await?;
    factory::guild_settings::GuildSettingsFactory::new(db, "222")
        .auto_send_enabled(false)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let prefs = repo.get_all().await?;

    let first = &prefs[&111];
    assert!(first.to_channel);
    assert!(!first.to_threads);
    assert!(first.allows(Game::Genshin));
    assert!(!first.allows(Game::StarRail));
    assert!(first.allows(Game::Zenless));

    assert!(!prefs[&222].auto_send);

    Ok(())
}
