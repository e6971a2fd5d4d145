use super::*;

/// Tests removing the same book twice.
///
/// Expected: first Ok, second NotFound(Entry)
#[tokio::test]
async fn second_removal_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 0).await?;
    let service = ListService::new(db);

    service.remove_book(list.id, book.id).await?;
    let second = service.remove_book(list.id, book.id).await;

    assert!(matches!(
        second,
        Err(AppError::NotFound(NotFoundError::Entry { .. }))
    ));
    assert!(BookListRepository::new(db).find_by_list_id(list.id).await?.is_empty());
    Ok(())
}

/// Tests the order of the existence checks.
///
/// Expected: unknown book reported before unknown list
#[tokio::test]
async fn checks_book_before_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let service = ListService::new(db);

    assert!(matches!(
        service.remove_book(500, 600).await,
        Err(AppError::NotFound(NotFoundError::Book(600)))
    ));
    assert!(matches!(
        service.remove_book(500, book.id).await,
        Err(AppError::NotFound(NotFoundError::List(500)))
    ));
    Ok(())
}
