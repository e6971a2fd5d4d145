use super::*;

/// Tests creating a club without a scheduled read.
///
/// Expected: Ok with zero subscribers and no schedule
#[tokio::test]
async fn creates_club_without_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = ClubRepository::new(db)
        .create("Bacano".to_string(), "Club".to_string(), 32, None)
        .await?;

    assert_eq!(club.subscribers, 0);
    assert_eq!(club.creator_id, 32);
    assert!(club.schedule.is_none());
    Ok(())
}

/// Tests creating a club with both halves of a scheduled read.
///
/// Expected: Ok with the schedule persisted
#[tokio::test]
async fn creates_club_with_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let schedule = ScheduledRead {
        book_id: book.id,
        read_time: Utc.timestamp_millis_opt(1_590_490_709_615).unwrap(),
    };

    let repo = ClubRepository::new(db);
    let club = repo
        .create(
            "Nocturnos".to_string(),
            String::new(),
            1,
            Some(schedule.clone()),
        )
        .await?;

    let stored = repo.find_by_id(club.id).await?.unwrap();
    assert_eq!(stored.schedule, Some(schedule));
    Ok(())
}

/// Tests listing all clubs and batch lookup.
///
/// Expected: clubs ordered by ID; unknown IDs skipped
#[tokio::test]
async fn lists_and_finds_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_club(db).await?;
    let second = factory::create_club(db).await?;

    let repo = ClubRepository::new(db);
    let all: Vec<i32> = repo.get_all().await?.iter().map(|c| c.id).collect();
    let some: Vec<i32> = repo
        .find_by_ids(&[second.id, 999])
        .await?
        .iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(all, vec![first.id, second.id]);
    assert_eq!(some, vec![second.id]);
    assert!(repo.find_by_ids(&[]).await?.is_empty());
    Ok(())
}

/// Tests deleting a club twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_club_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let repo = ClubRepository::new(db);

    assert!(repo.delete(club.id).await?);
    assert!(!repo.delete(club.id).await?);
    assert!(repo.find_by_id(club.id).await?.is_none());
    Ok(())
}
