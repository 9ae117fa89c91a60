use super::*;

/// Tests expiring codes.
///
/// Verifies that only the listed keys are flipped, and that a code with the same text
/// under another game is not affected.
///
/// Expected: Ok with exactly one row updated
#[tokio::test]
async fn expires_only_listed_keys() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_redemption_code(db, "genshin", "SHAREDCODE").await?;
    factory::create_redemption_code(db, "hkrpg", "SHAREDCODE").await?;

    let repo = RedemptionCodeRepository::new(db);
    let updated = repo
        .mark_expired(&[CodeKey::new(Game::Genshin, "SHAREDCODE")])
        .await?;

    assert_eq!(updated, 1);
    assert!(stored(db, "genshin", "SHAREDCODE").await?.unwrap().is_expired);
    assert!(!stored(db, "hkrpg", "SHAREDCODE").await?.unwrap().is_expired);

    Ok(())
}

/// Tests that expiring twice is idempotent.
///
/// Expected: Ok with the record still expired after the second call
#[tokio::test]
async fn expiring_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_redemption_code(db, "nap", "ZZZGIFT").await?;

    let repo = RedemptionCodeRepository::new(db);
    let keys = [CodeKey::new(Game::Zenless, "ZZZGIFT")];
    repo.mark_expired(&keys).await?;
    repo.mark_expired(&keys).await?;

    assert!(stored(db, "nap", "ZZZGIFT").await?.unwrap().is_expired);

    Ok(())
}
