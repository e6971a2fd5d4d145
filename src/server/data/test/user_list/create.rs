use super::*;

/// Tests creating a list.
///
/// Expected: Ok with the list persisted for its owner
#[tokio::test]
async fn creates_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserListRepository::new(db);
    let list = repo
        .create(CreateUserListParams {
            user_id: 32,
            name: "Bacano".to_string(),
            description: "Unos libros".to_string(),
        })
        .await?;

    assert_eq!(list.user_id, 32);
    assert_eq!(list.name, "Bacano");

    let stored = entity::prelude::UserList::find_by_id(list.id).one(db).await?;
    assert_eq!(stored.unwrap().description, "Unos libros");
    Ok(())
}

/// Tests that two lists of the same user may share a name.
///
/// Expected: Ok with two distinct lists
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserListRepository::new(db);
    let params = CreateUserListParams {
        user_id: 5,
        name: "Reading".to_string(),
        description: String::new(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_by_user_id(5).await?.len(), 2);
    Ok(())
}
