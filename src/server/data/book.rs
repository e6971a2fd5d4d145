//! Book data repository.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::book::{Book, CreateBookParams};

/// Repository providing database operations for catalogue books.
pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new book.
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let entity = entity::prelude::Book::insert(entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            pages: ActiveValue::Set(params.pages),
            synopsis: ActiveValue::Set(params.synopsis),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Finds a book by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Fetches all books whose ID is in `ids`, in no particular order.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Book>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }
}
