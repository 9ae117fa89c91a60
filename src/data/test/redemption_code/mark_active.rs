use super::*;

/// Tests reactivating expired codes across games.
///
/// Expected: Ok with both records active again
#[tokio::test]
async fn reactivates_expired_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RedemptionCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (game, code) in [("genshin", "BACKAGAIN"), ("nap", "ZZZBACK")] {
        factory::redemption_code::RedemptionCodeFactory::new(db)
            .game(game)
            .code(code)
            .expired(true)
            .build()
            .await?;
    }

    let repo = RedemptionCodeRepository::new(db);
    let updated = repo
        .mark_active(&[
            CodeKey::new(Game::Genshin, "BACKAGAIN"),
            CodeKey::new(Game::Zenless, "ZZZBACK"),
        ])
        .await?;

    assert_eq!(updated, 2);
    assert!(!stored(db, "genshin", "BACKAGAIN").await?.unwrap().is_expired);
    assert!(!stored(db, "nap", "ZZZBACK").await?.unwrap().is_expired);

    Ok(())
}
