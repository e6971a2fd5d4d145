//! Book list entry data repository.
//!
//! Manages the `(list, book)` membership records and the progress they carry. The
//! composite primary key guarantees at most one entry per pair at the storage level.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{list::BookListEntry, progress::Progress};

/// Repository providing database operations for book list entries.
pub struct BookListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookListRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the entry for a `(list, book)` pair.
    pub async fn find(&self, list_id: i32, book_id: i32) -> Result<Option<BookListEntry>, DbErr> {
        let entity = entity::prelude::BookList::find_by_id((list_id, book_id))
            .one(self.db)
            .await?;

        Ok(entity.map(BookListEntry::from_entity))
    }

    /// Gets every entry of a list in storage (primary key) order.
    pub async fn find_by_list_id(&self, list_id: i32) -> Result<Vec<BookListEntry>, DbErr> {
        let entities = entity::prelude::BookList::find()
            .filter(entity::book_list::Column::ListId.eq(list_id))
            .order_by_asc(entity::book_list::Column::BookId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BookListEntry::from_entity).collect())
    }

    /// Gets the entries for one book among the given lists.
    pub async fn find_by_book_in_lists(
        &self,
        book_id: i32,
        list_ids: &[i32],
    ) -> Result<Vec<BookListEntry>, DbErr> {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::BookList::find()
            .filter(entity::book_list::Column::BookId.eq(book_id))
            .filter(entity::book_list::Column::ListId.is_in(list_ids.iter().copied()))
            .order_by_asc(entity::book_list::Column::ListId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BookListEntry::from_entity).collect())
    }

    /// Inserts an entry. Fails with a database error if the pair already exists.
    pub async fn create(
        &self,
        list_id: i32,
        book_id: i32,
        progress: Progress,
    ) -> Result<BookListEntry, DbErr> {
        let entity = entity::prelude::BookList::insert(entity::book_list::ActiveModel {
            list_id: ActiveValue::Set(list_id),
            book_id: ActiveValue::Set(book_id),
            progress: ActiveValue::Set(progress.value()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(BookListEntry::from_entity(entity))
    }

    /// Overwrites the progress of an existing entry.
    pub async fn update_progress(&self, entry: &BookListEntry) -> Result<(), DbErr> {
        entity::prelude::BookList::update_many()
            .col_expr(
                entity::book_list::Column::Progress,
                Expr::value(entry.progress.value()),
            )
            .filter(entity::book_list::Column::ListId.eq(entry.list_id))
            .filter(entity::book_list::Column::BookId.eq(entry.book_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the entry for a pair.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - The book was not on the list
    pub async fn delete(&self, list_id: i32, book_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BookList::delete_by_id((list_id, book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every entry of a list, returning how many were removed.
    pub async fn delete_by_list_id(&self, list_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BookList::delete_many()
            .filter(entity::book_list::Column::ListId.eq(list_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
