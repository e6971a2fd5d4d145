use super::*;

/// Tests deleting an existing and a missing list.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_list_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::create_user_list(db, 1).await?;
    let repo = UserListRepository::new(db);

    assert!(repo.delete(list.id).await?);
    assert!(!repo.delete(list.id).await?);
    assert!(repo.find_by_id(list.id).await?.is_none());
    Ok(())
}
