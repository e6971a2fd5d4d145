//! User list factory for creating test list entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user lists with customizable fields.
pub struct UserListFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    name: String,
    description: String,
}

impl<'a> UserListFactory<'a> {
    /// Creates a new UserListFactory owned by `user_id`.
    ///
    /// Defaults:
    /// - name: `"List {id}"`
    /// - description: `"Description {id}"`
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("List {}", id),
            description: format!("Description {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the list entity into the database.
    pub async fn build(self) -> Result<entity::user_list::Model, DbErr> {
        entity::user_list::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list with default values for the given user.
pub async fn create_user_list(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_list::Model, DbErr> {
    UserListFactory::new(db, user_id).build().await
}

/// Creates a list with a specific name for the given user.
///
/// ```rust,ignore
/// let finished = create_user_list_named(&db, 7, "Finished").await?;
/// ```
pub async fn create_user_list_named(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
) -> Result<entity::user_list::Model, DbErr> {
    UserListFactory::new(db, user_id).name(name).build().await
}
