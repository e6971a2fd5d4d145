use super::*;

/// Tests finding a list by owner and exact name.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user or other casing
#[tokio::test]
async fn matches_owner_and_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let anime = factory::create_user_list_named(db, 32, "Anime").await?;
    factory::create_user_list_named(db, 33, "Manga").await?;

    let repo = UserListRepository::new(db);

    let found = repo.find_by_user_and_name(32, "Anime").await?;
    assert_eq!(found.map(|l| l.id), Some(anime.id));

    assert!(repo.find_by_user_and_name(33, "Anime").await?.is_none());
    assert!(repo.find_by_user_and_name(32, "anime").await?.is_none());
    Ok(())
}

/// Tests that the oldest list wins when names collide.
///
/// Expected: Ok(Some) with the first created list
#[tokio::test]
async fn returns_oldest_list_for_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user_list_named(db, 4, "Reading").await?;
    factory::create_user_list_named(db, 4, "Reading").await?;

    let found = UserListRepository::new(db)
        .find_by_user_and_name(4, "Reading")
        .await?;

    assert_eq!(found.map(|l| l.id), Some(first.id));
    Ok(())
}
