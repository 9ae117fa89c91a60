use super::*;

/// Tests that the newest record for the game is returned.
///
/// Expected: Ok with the later version, ignoring other games
#[tokio::test]
async fn returns_newest_record_for_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::livestream_tracking::LivestreamTrackingFactory::new(db)
        .version("5.3")
        .build()
        .await?;
    let newest = factory::livestream_tracking::LivestreamTrackingFactory::new(db)
        .version("5.4")
        .build()
        .await?;
    factory::create_livestream_tracking(db, "nap").await?;

    let repo = LivestreamRepository::new(db);
    let latest = repo.latest_for_game(Game::Genshin).await?.unwrap();

    assert_eq!(latest.id, newest.id);
    assert_eq!(latest.version, "5.4");

    Ok(())
}

/// Tests a game that has never been tracked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LivestreamRepository::new(db);

    assert!(repo.latest_for_game(Game::Zenless).await?.is_none());

    Ok(())
}
