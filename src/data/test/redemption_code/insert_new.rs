use super::*;

/// Tests bulk-inserting new codes.
///
/// Expected: Ok with every code stored as active
#[tokio::test]
async fn inserts_codes_as_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RedemptionCodeRepository::new(db);
    let inserted = repo
        .insert_new(&[
            record(Game::Genshin, "GENSHINGIFT"),
            record(Game::Zenless, "ZZZGIFT"),
        ])
        .await?;

    assert_eq!(inserted, 2);
    let stored = stored(db, "genshin", "GENSHINGIFT").await?.unwrap();
    assert!(!stored.is_expired);
    assert_eq!(stored.reward, Some("60 Primogem".to_string()));

    Ok(())
}

/// Tests that inserting an existing key leaves the stored row untouched.
///
/// Verifies that the insert ignores conflicts instead of failing or resetting an
/// expired record back to active.
///
/// Expected: Ok with the existing record still expired
#[tokio::test]
async fn ignores_existing_keys() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::redemption_code::RedemptionCodeFactory::new(db)
        .code("GENSHINGIFT")
        .expired(true)
        .build()
        .await?;

    let repo = RedemptionCodeRepository::new(db);
    repo.insert_new(&[
        record(Game::Genshin, "GENSHINGIFT"),
        record(Game::Genshin, "NEWGIFT"),
    ])
    .await?;

    let count = entity::prelude::RedemptionCode::find().count(db).await?;
    assert_eq!(count, 2);
    assert!(stored(db, "genshin", "GENSHINGIFT").await?.unwrap().is_expired);

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RedemptionCodeRepository::new(db);

    assert_eq!(repo.insert_new(&[]).await?, 0);

    Ok(())
}
