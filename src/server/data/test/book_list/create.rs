use super::*;

/// Tests inserting an entry.
///
/// Expected: Ok with the progress stored
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let list = factory::create_user_list(db, 1).await?;

    let entry = BookListRepository::new(db)
        .create(list.id, book.id, Progress::parse("12", book.pages).unwrap())
        .await?;

    assert_eq!(entry.progress.value(), 12);

    let stored = entity::prelude::BookList::find_by_id((list.id, book.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.progress, 12);
    Ok(())
}

/// Tests that the composite key rejects a second entry for the same pair.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 0).await?;

    let result = BookListRepository::new(db)
        .create(list.id, book.id, Progress::parse("0", book.pages).unwrap())
        .await;

    assert!(result.is_err());
    Ok(())
}
