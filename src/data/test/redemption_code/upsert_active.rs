use super::*;

/// Tests upserting livestream codes into the code store.
///
/// Verifies that a new code is inserted and an existing expired code is reactivated
/// without its reward being replaced.
///
/// Expected: Ok with both codes active
#[tokio::test]
async fn inserts_and_reactivates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::redemption_code::RedemptionCodeFactory::new(db)
        .code("STREAMOLD")
        .reward(Some("30 Primogem"))
        .expired(true)
        .build()
        .await?;

    let repo = RedemptionCodeRepository::new(db);
    repo.upsert_active(
        Game::Genshin,
        &[
            ("STREAMOLD".to_string(), Some("100 Primogem".to_string())),
            ("STREAMNEW".to_string(), Some("100 Primogem".to_string())),
        ],
    )
    .await?;

    let old = stored(db, "genshin", "STREAMOLD").await?.unwrap();
    assert!(!old.is_expired);
    assert_eq!(old.reward, Some("30 Primogem".to_string()));

    let new = stored(db, "genshin", "STREAMNEW").await?.unwrap();
    assert!(!new.is_expired);

    Ok(())
}
