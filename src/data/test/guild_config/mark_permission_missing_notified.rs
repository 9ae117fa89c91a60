use super::*;

/// Tests recording the permission alert together with the missing permission list.
///
/// Expected: Ok with flag set and permission stored
#[tokio::test]
async fn stores_missing_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let guild_id: u64 = config.guild_id.parse().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.mark_permission_missing_notified(guild_id, "EMBED_LINKS")
        .await?;

    let reloaded = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert!(reloaded.alerts.permission_missing_notified);
    assert_eq!(
        reloaded.alerts.permission_missing.as_deref(),
        Some("EMBED_LINKS")
    );
    assert!(!reloaded.alerts.permission_alert_due());

    Ok(())
}
