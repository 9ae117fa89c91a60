use super::*;

/// Tests deleting a guild config.
///
/// Verifies that only the targeted guild is removed.
///
/// Expected: Ok(1) and the other guild still present
#[tokio::test]
async fn deletes_only_target_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_guild_config(db).await?;
    let other = factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let deleted = repo.delete(target.guild_id.parse().unwrap()).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_by_guild_id(target.guild_id.parse().unwrap())
        .await?
        .is_none());
    assert!(repo
        .find_by_guild_id(other.guild_id.parse().unwrap())
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a guild that has no config.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_guild_deletes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);

    Ok(())
}
