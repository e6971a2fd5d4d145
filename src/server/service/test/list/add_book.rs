use super::*;

/// Tests the inclusive progress bounds when adding a book.
///
/// Expected: 0 and the page count stored as given; -1 and pages + 1 rejected with no
/// entry created
#[tokio::test]
async fn stores_progress_only_within_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book_with_pages(db, 250).await?;
    let service = ListService::new(db);
    let repo = BookListRepository::new(db);

    for accepted in ["0", "250"] {
        let list = factory::create_user_list(db, 1).await?;
        service
            .add_book(list.id, book.id, Some(accepted.to_string()))
            .await?;

        let stored = repo.find(list.id, book.id).await?.unwrap();
        assert_eq!(stored.progress.to_string(), accepted);
    }

    for rejected in ["-1", "251", "half"] {
        let list = factory::create_user_list(db, 2).await?;
        let result = service
            .add_book(list.id, book.id, Some(rejected.to_string()))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(repo.find(list.id, book.id).await?.is_none());
    }
    Ok(())
}

/// Tests adding without a progress value.
///
/// Expected: entry created with progress 0
#[tokio::test]
async fn defaults_progress_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let list = factory::create_user_list(db, 1).await?;

    let entry = ListService::new(db).add_book(list.id, book.id, None).await?;

    assert_eq!(entry.progress.value(), 0);
    Ok(())
}

/// Tests that a "Finished" list records the full page count.
///
/// Expected: progress 250 regardless of the supplied value, even an invalid one
#[tokio::test]
async fn finished_list_records_full_page_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book_with_pages(db, 250).await?;
    let finished = factory::create_user_list_named(db, 1, FINISHED_LIST_NAME).await?;

    let entry = ListService::new(db)
        .add_book(finished.id, book.id, Some("12".to_string()))
        .await?;
    assert_eq!(entry.progress.value(), 250);

    let other = factory::create_book_with_pages(db, 250).await?;
    let entry = ListService::new(db)
        .add_book(finished.id, other.id, Some("9000".to_string()))
        .await?;
    assert_eq!(entry.progress.value(), 250);
    Ok(())
}

/// Tests that finishing a book carries its page count to the user's other lists.
///
/// Expected: the "Reading" entry reads 250 afterwards
#[tokio::test]
async fn finishing_propagates_to_other_lists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, reading, _) = factory::helpers::create_book_in_list(db, 1, 40).await?;
    let finished = factory::create_user_list_named(db, 1, FINISHED_LIST_NAME).await?;

    ListService::new(db).add_book(finished.id, book.id, None).await?;

    let entry = BookListRepository::new(db)
        .find(reading.id, book.id)
        .await?
        .unwrap();
    assert_eq!(entry.progress.value(), 250);
    Ok(())
}

/// Tests adding a book that is already on the list.
///
/// Expected: Err(Conflict); the existing entry keeps its progress
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 10).await?;

    let result = ListService::new(db)
        .add_book(list.id, book.id, Some("20".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::AlreadyInList { .. }))
    ));

    let entry = BookListRepository::new(db).find(list.id, book.id).await?.unwrap();
    assert_eq!(entry.progress.value(), 10);
    Ok(())
}

/// Tests unknown list and unknown book.
///
/// Expected: NotFound naming the missing entity
#[tokio::test]
async fn fails_for_unknown_list_or_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let list = factory::create_user_list(db, 1).await?;
    let service = ListService::new(db);

    assert!(matches!(
        service.add_book(list.id + 1, book.id, None).await,
        Err(AppError::NotFound(NotFoundError::List(_)))
    ));
    assert!(matches!(
        service.add_book(list.id, book.id + 1, None).await,
        Err(AppError::NotFound(NotFoundError::Book(_)))
    ));
    Ok(())
}

/// Tests that malformed progress is reported as such.
///
/// Expected: Err(Validation(MalformedProgress))
#[tokio::test]
async fn rejects_malformed_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let list = factory::create_user_list(db, 1).await?;

    let result = ListService::new(db)
        .add_book(list.id, book.id, Some("12.5".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::MalformedProgress { .. }))
    ));
    Ok(())
}
