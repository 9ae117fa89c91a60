use super::*;

/// Tests creating a tracking record for an announced special program.
///
/// Expected: Ok with all flags cleared and the tracking message stored
#[tokio::test]
async fn creates_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LivestreamRepository::new(db);
    let tracking = repo
        .create(CreateLivestreamTrackingParam {
            game: Game::StarRail,
            version: "3.1".to_string(),
            stream_time: Some(1_735_732_800),
            tracking_channel_id: Some(10),
            tracking_message_id: Some(20),
        })
        .await?;

    assert_eq!(tracking.game, Game::StarRail);
    assert_eq!(tracking.version, "3.1");
    assert!(!tracking.found);
    assert!(!tracking.distributed);
    assert_eq!(tracking.tracking_message_id, Some(20));

    Ok(())
}

/// Tests that a second record for the same game and version is rejected.
///
/// Expected: Err(DbErr) from the unique index
#[tokio::test]
async fn rejects_duplicate_version() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateLivestreamTrackingParam {
        game: Game::Genshin,
        version: "5.4".to_string(),
        stream_time: None,
        tracking_channel_id: None,
        tracking_message_id: None,
    };

    let repo = LivestreamRepository::new(db);
    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
