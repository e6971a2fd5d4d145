use super::*;

/// Tests incrementing and decrementing the counter.
///
/// Expected: 0 -> 1 -> 2 -> 1
#[tokio::test]
async fn adjusts_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let repo = ClubRepository::new(db);

    assert_eq!(repo.adjust_subscribers(club.id, 1).await?.subscribers, 1);
    assert_eq!(repo.adjust_subscribers(club.id, 1).await?.subscribers, 2);
    assert_eq!(repo.adjust_subscribers(club.id, -1).await?.subscribers, 1);
    Ok(())
}

/// Tests that the counter never goes negative.
///
/// Expected: stays at 0
#[tokio::test]
async fn floors_counter_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let updated = ClubRepository::new(db).adjust_subscribers(club.id, -1).await?;

    assert_eq!(updated.subscribers, 0);
    Ok(())
}

/// Tests adjusting an unknown club.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClubRepository::new(db).adjust_subscribers(5, 1).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    Ok(())
}
