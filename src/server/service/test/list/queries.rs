use super::*;

/// Tests that a numeric token resolves a list owned by someone else.
///
/// Expected: Ok with the other user's list
#[tokio::test]
async fn numeric_token_ignores_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let theirs = factory::create_user_list_named(db, 2, "Theirs").await?;

    let list = ListService::new(db)
        .resolve_list(1, &theirs.id.to_string())
        .await?;

    assert_eq!(list.id, theirs.id);
    assert_eq!(list.user_id, 2);
    Ok(())
}

/// Tests resolving by name within the requesting user's lists.
///
/// Expected: Ok for the owner, NotFound(ListByName) for another user
#[tokio::test]
async fn name_token_is_scoped_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let anime = factory::create_user_list_named(db, 32, "Anime").await?;
    let service = ListService::new(db);

    assert_eq!(service.resolve_list(32, "Anime").await?.id, anime.id);
    assert!(matches!(
        service.resolve_list(33, "Anime").await,
        Err(AppError::NotFound(NotFoundError::ListByName { .. }))
    ));
    Ok(())
}

/// Tests that a list with an empty name cannot be resolved by name.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn empty_name_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_list_named(db, 1, "").await?;

    let result = ListService::new(db).resolve_list(1, "").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    Ok(())
}

/// Tests loading the books of a list.
///
/// Expected: books in entry storage order; empty for a list without entries
#[tokio::test]
async fn lists_books_in_entry_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;
    let list = factory::create_user_list_named(db, 1, "Reading").await?;
    let empty = factory::create_user_list_named(db, 1, "Empty").await?;
    factory::create_book_list(db, list.id, second.id, 0).await?;
    factory::create_book_list(db, list.id, first.id, 0).await?;

    let service = ListService::new(db);

    let with_books = service.get_list_with_books(1, "Reading").await?;
    let ids: Vec<i32> = with_books.books.iter().map(|b| b.id).collect();
    assert_eq!(with_books.list.id, list.id);
    assert_eq!(ids, vec![first.id, second.id]);

    let without_books = service.get_list_with_books(1, "Empty").await?;
    assert_eq!(without_books.list.id, empty.id);
    assert!(without_books.books.is_empty());
    Ok(())
}

/// Tests creating lists with the same name and listing them.
///
/// Expected: both created, returned in creation order
#[tokio::test]
async fn creates_and_lists_lists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let params = CreateUserListParams {
        user_id: 9,
        name: "Reading".to_string(),
        description: "Now".to_string(),
    };

    let first = service.create_list(params.clone()).await?;
    let second = service.create_list(params).await?;

    let ids: Vec<i32> = service.get_lists(9).await?.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(service.get_lists(10).await?.is_empty());
    Ok(())
}
