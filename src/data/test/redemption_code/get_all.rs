use super::*;

/// Tests loading every stored code.
///
/// Verifies that active and expired records for all games are returned with their
/// expiry state intact.
///
/// Expected: Ok with both records
#[tokio::test]
async fn returns_all_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_redemption_code(db, "genshin", "GENSHINGIFT").await?;
    factory::redemption_code::RedemptionCodeFactory::new(db)
        .game("hkrpg")
        .code("STARRAILGIFT")
        .expired(true)
        .build()
        .await?;

    let repo = RedemptionCodeRepository::new(db);
    let mut records = repo.get_all().await?;
    records.sort_by(|a, b| a.code.cmp(&b.code));

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, "GENSHINGIFT");
    assert_eq!(records[0].game, Game::Genshin);
    assert!(!records[0].is_expired);
    assert_eq!(records[1].game, Game::StarRail);
    assert!(records[1].is_expired);

    Ok(())
}

/// Tests that rows for unsupported games are skipped.
///
/// Expected: Ok with only the supported game's record
#[tokio::test]
async fn skips_unknown_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_redemption_code(db, "nap", "ZZZGIFT").await?;
    factory::create_redemption_code(db, "honkai3rd", "OLDGIFT").await?;

    let repo = RedemptionCodeRepository::new(db);
    let records = repo.get_all().await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].game, Game::Zenless);

    Ok(())
}
