use super::*;

/// Tests overwriting the progress of one entry.
///
/// Expected: only the targeted entry changes
#[tokio::test]
async fn updates_only_targeted_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, list, _) = factory::helpers::create_book_in_list(db, 1, 10).await?;
    let other_list = factory::create_user_list(db, 1).await?;
    factory::create_book_list(db, other_list.id, book.id, 10).await?;

    let repo = BookListRepository::new(db);
    repo.update_progress(&BookListEntry {
        list_id: list.id,
        book_id: book.id,
        progress: Progress::parse("99", book.pages).unwrap(),
    })
    .await?;

    assert_eq!(repo.find(list.id, book.id).await?.unwrap().progress.value(), 99);
    assert_eq!(
        repo.find(other_list.id, book.id)
            .await?
            .unwrap()
            .progress
            .value(),
        10
    );
    Ok(())
}
