use super::*;

/// Tests deleting a list with entries.
///
/// Expected: list and its entries gone; the book's entry on another list kept
#[tokio::test]
async fn deletes_list_and_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 0).await?;
    let other = factory::create_user_list(db, 1).await?;
    factory::create_book_list(db, other.id, book.id, 0).await?;

    let service = ListService::new(db);
    service.delete_list(list.id).await?;

    let repo = BookListRepository::new(db);
    assert!(repo.find_by_list_id(list.id).await?.is_empty());
    assert_eq!(repo.find_by_list_id(other.id).await?.len(), 1);
    assert!(matches!(
        service.resolve_list(1, &list.id.to_string()).await,
        Err(AppError::NotFound(NotFoundError::List(_)))
    ));
    Ok(())
}

/// Tests deleting an unknown list.
///
/// Expected: Err(NotFound(List))
#[tokio::test]
async fn fails_for_unknown_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListService::new(db).delete_list(3).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(NotFoundError::List(3)))
    ));
    Ok(())
}
