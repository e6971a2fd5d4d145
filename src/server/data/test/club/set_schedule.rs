use super::*;

/// Tests overwriting an existing schedule.
///
/// Expected: Ok(Some) with the new book and date
#[tokio::test]
async fn overwrites_existing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_book = factory::create_book(db).await?;
    let new_book = factory::create_book(db).await?;
    let club = factory::club::ClubFactory::new(db)
        .scheduled(old_book.id, Utc.timestamp_millis_opt(1_000).unwrap())
        .build()
        .await?;

    let schedule = ScheduledRead {
        book_id: new_book.id,
        read_time: Utc.timestamp_millis_opt(2_000_000).unwrap(),
    };

    let updated = ClubRepository::new(db)
        .set_schedule(club.id, schedule.clone())
        .await?;

    assert_eq!(updated.and_then(|c| c.schedule), Some(schedule));
    Ok(())
}

/// Tests that the book is stored without checking that it exists.
///
/// Expected: Ok(Some) referencing the unknown book
#[tokio::test]
async fn accepts_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let updated = ClubRepository::new(db)
        .set_schedule(
            club.id,
            ScheduledRead {
                book_id: 4242,
                read_time: Utc.timestamp_millis_opt(0).unwrap(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.schedule.map(|s| s.book_id), Some(4242));
    Ok(())
}

/// Tests scheduling an unknown club.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ClubRepository::new(db)
        .set_schedule(
            77,
            ScheduledRead {
                book_id: 1,
                read_time: Utc.timestamp_millis_opt(0).unwrap(),
            },
        )
        .await?;

    assert!(updated.is_none());
    Ok(())
}
