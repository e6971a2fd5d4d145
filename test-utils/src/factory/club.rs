//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let club = ClubFactory::new(&db)
///     .subscribers(3)
///     .scheduled(book.id, Utc::now())
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    creator_id: i64,
    subscribers: i32,
    book_id: Option<i32>,
    read_time: Option<DateTime<Utc>>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"`
    /// - creator_id: `1`
    /// - subscribers: `0`
    /// - no scheduled read
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Club {}", id),
            description: format!("Description {}", id),
            creator_id: 1,
            subscribers: 0,
            book_id: None,
            read_time: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn creator_id(mut self, creator_id: i64) -> Self {
        self.creator_id = creator_id;
        self
    }

    pub fn subscribers(mut self, subscribers: i32) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Sets both halves of the scheduled read.
    pub fn scheduled(mut self, book_id: i32, read_time: DateTime<Utc>) -> Self {
        self.book_id = Some(book_id);
        self.read_time = Some(read_time);
        self
    }

    /// Builds and inserts the club entity into the database.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            creator_id: ActiveValue::Set(self.creator_id),
            subscribers: ActiveValue::Set(self.subscribers),
            book_id: ActiveValue::Set(self.book_id),
            read_time: ActiveValue::Set(self.read_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
