use super::*;

/// Tests storing discovered codes.
///
/// Verifies that codes are stored, the expected count is kept and `found` is set.
///
/// Expected: Ok with two codes and found = true
#[tokio::test]
async fn stores_codes_and_marks_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tracking = factory::create_livestream_tracking(db, "genshin").await?;

    let repo = LivestreamRepository::new(db);
    repo.record_codes(tracking.id, &[discovered("LIVE1"), discovered("LIVE2")], Some(3))
        .await?;

    let codes = repo.get_codes(tracking.id).await?;
    let reloaded = repo.find_by_id(tracking.id).await?.unwrap();

    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].code, "LIVE1");
    assert_eq!(codes[0].expire_at, Some(1_735_819_200));
    assert!(reloaded.found);
    assert_eq!(reloaded.expected_code_count, Some(3));

    Ok(())
}

/// Tests recording the same code twice across polls.
///
/// Expected: Ok with the code stored once
#[tokio::test]
async fn ignores_already_recorded_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tracking = factory::create_livestream_tracking(db, "hkrpg").await?;

    let repo = LivestreamRepository::new(db);
    repo.record_codes(tracking.id, &[discovered("LIVE1")], None)
        .await?;
    repo.record_codes(tracking.id, &[discovered("LIVE1"), discovered("LIVE2")], None)
        .await?;

    let codes = repo.get_codes(tracking.id).await?;
    assert_eq!(codes.len(), 2);

    Ok(())
}

/// Tests that an empty parse does not flip `found`.
///
/// Expected: Ok with found still false
#[tokio::test]
async fn empty_parse_keeps_searching() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tracking = factory::create_livestream_tracking(db, "genshin").await?;

    let repo = LivestreamRepository::new(db);
    repo.record_codes(tracking.id, &[], Some(3)).await?;

    let reloaded = repo.find_by_id(tracking.id).await?.unwrap();
    assert!(!reloaded.found);
    assert_eq!(reloaded.expected_code_count, Some(3));

    Ok(())
}
