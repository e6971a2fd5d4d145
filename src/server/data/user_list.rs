//! User list data repository.
//!
//! Handles creation, lookup by identifier or by (owner, name), and deletion of user
//! lists. Deleting a list does not touch its entries; callers remove those first.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::list::{CreateUserListParams, UserList};

/// Repository providing database operations for user lists.
pub struct UserListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserListRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new list. No uniqueness check is made on the name.
    pub async fn create(&self, params: CreateUserListParams) -> Result<UserList, DbErr> {
        let entity = entity::prelude::UserList::insert(entity::user_list::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(UserList::from_entity(entity))
    }

    /// Finds a list by its ID regardless of owner.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserList>, DbErr> {
        let entity = entity::prelude::UserList::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserList::from_entity))
    }

    /// Gets every list owned by a user, ordered by ID.
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<UserList>, DbErr> {
        let entities = entity::prelude::UserList::find()
            .filter(entity::user_list::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_list::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserList::from_entity).collect())
    }

    /// Finds a user's list by exact name.
    ///
    /// Names are not unique; the oldest matching list wins.
    pub async fn find_by_user_and_name(
        &self,
        user_id: i64,
        name: &str,
    ) -> Result<Option<UserList>, DbErr> {
        let entity = entity::prelude::UserList::find()
            .filter(entity::user_list::Column::UserId.eq(user_id))
            .filter(entity::user_list::Column::Name.eq(name))
            .order_by_asc(entity::user_list::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(UserList::from_entity))
    }

    /// Deletes a list.
    ///
    /// # Returns
    /// - `Ok(true)` - List deleted
    /// - `Ok(false)` - No list with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserList::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
