use super::*;

/// Tests finding an entry by its pair.
///
/// Expected: Ok(Some) for the pair, Ok(None) for a book not on the list
#[tokio::test]
async fn finds_entry_by_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 30).await?;
    let other = factory::create_book(db).await?;

    let repo = BookListRepository::new(db);

    let entry = repo.find(list.id, book.id).await?.unwrap();
    assert_eq!(entry.progress.value(), 30);
    assert!(repo.find(list.id, other.id).await?.is_none());
    Ok(())
}

/// Tests listing the entries of a list.
///
/// Expected: Ok with entries of that list only, ordered by book
#[tokio::test]
async fn finds_entries_by_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_user_list(db, 1).await?;
    let other_list = factory::create_user_list(db, 1).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;

    factory::create_book_list(db, list.id, second.id, 0).await?;
    factory::create_book_list(db, list.id, first.id, 0).await?;
    factory::create_book_list(db, other_list.id, first.id, 0).await?;

    let entries = BookListRepository::new(db).find_by_list_id(list.id).await?;
    let book_ids: Vec<i32> = entries.iter().map(|e| e.book_id).collect();

    assert_eq!(book_ids, vec![first.id, second.id]);
    Ok(())
}

/// Tests finding one book's entries among a set of lists.
///
/// Expected: Ok with entries only for the requested lists and book
#[tokio::test]
async fn finds_book_entries_in_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let other_book = factory::create_book(db).await?;
    let mine = factory::create_user_list(db, 1).await?;
    let also_mine = factory::create_user_list(db, 1).await?;
    let theirs = factory::create_user_list(db, 2).await?;

    factory::create_book_list(db, mine.id, book.id, 5).await?;
    factory::create_book_list(db, also_mine.id, other_book.id, 5).await?;
    factory::create_book_list(db, theirs.id, book.id, 5).await?;

    let repo = BookListRepository::new(db);
    let entries = repo
        .find_by_book_in_lists(book.id, &[mine.id, also_mine.id])
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].list_id, mine.id);
    assert!(repo.find_by_book_in_lists(book.id, &[]).await?.is_empty());
    Ok(())
}
