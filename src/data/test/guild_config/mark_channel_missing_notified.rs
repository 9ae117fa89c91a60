use super::*;

/// Tests setting the channel-missing alert flag.
///
/// Expected: Ok with flag and timestamp set
#[tokio::test]
async fn sets_flag_and_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let guild_id: u64 = config.guild_id.parse().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.mark_channel_missing_notified(guild_id).await?;

    let stored = entity::prelude::GuildConfig::find_by_id(config.guild_id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.channel_missing_notified);
    assert!(stored.channel_missing_notified_at.is_some());
    assert!(!stored.permission_missing_notified);

    Ok(())
}
