use super::*;

/// Tests deleting an entry twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_entry_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 0).await?;
    let repo = BookListRepository::new(db);

    assert!(repo.delete(list.id, book.id).await?);
    assert!(!repo.delete(list.id, book.id).await?);
    Ok(())
}

/// Tests clearing every entry of a list.
///
/// Expected: Ok with the number removed; other lists untouched
#[tokio::test]
async fn deletes_all_entries_of_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_user_list(db, 1).await?;
    let other_list = factory::create_user_list(db, 1).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;
    factory::create_book_list(db, list.id, first.id, 0).await?;
    factory::create_book_list(db, list.id, second.id, 0).await?;
    factory::create_book_list(db, other_list.id, first.id, 0).await?;

    let repo = BookListRepository::new(db);

    assert_eq!(repo.delete_by_list_id(list.id).await?, 2);
    assert!(repo.find_by_list_id(list.id).await?.is_empty());
    assert_eq!(repo.find_by_list_id(other_list.id).await?.len(), 1);
    Ok(())
}
