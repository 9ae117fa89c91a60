use super::*;

/// Tests that only the first claim succeeds.
///
/// Expected: first claim true, second claim false, record distributed
#[tokio::test]
async fn second_claim_loses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tracking = factory::livestream_tracking::LivestreamTrackingFactory::new(db)
        .found(true)
        .build()
        .await?;

    let repo = LivestreamRepository::new(db);

    assert!(repo.claim_distribution(tracking.id).await?);
    assert!(!repo.claim_distribution(tracking.id).await?);
    assert!(repo.find_by_id(tracking.id).await?.unwrap().distributed);

    Ok(())
}

/// Tests racing two claims concurrently.
///
/// Expected: exactly one of the two claims wins
#[tokio::test]
async fn concurrent_claims_have_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tracking = factory::livestream_tracking::LivestreamTrackingFactory::new(db)
        .found(true)
        .build()
        .await?;

    let repo = LivestreamRepository::new(db);
    let (a, b) = tokio::join!(
        repo.claim_distribution(tracking.id),
        repo.claim_distribution(tracking.id)
    );

    assert!(a? ^ b?);

    Ok(())
}

/// Tests claiming a record that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_record_cannot_be_claimed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_livestream_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LivestreamRepository::new(db);

    assert!(!repo.claim_distribution(999).await?);

    Ok(())
}
