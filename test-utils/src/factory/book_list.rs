//! Book list entry factory.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a book list entry for the `(list_id, book_id)` pair.
///
/// The list and book must already exist.
///
/// # Returns
/// - `Ok(entity::book_list::Model)` - Created entry
/// - `Err(DbErr)` - Database error, including a duplicate pair
pub async fn create_book_list(
    db: &DatabaseConnection,
    list_id: i32,
    book_id: i32,
    progress: i32,
) -> Result<entity::book_list::Model, DbErr> {
    entity::prelude::BookList::insert(entity::book_list::ActiveModel {
        list_id: ActiveValue::Set(list_id),
        book_id: ActiveValue::Set(book_id),
        progress: ActiveValue::Set(progress),
    })
    .exec_with_returning(db)
    .await
}
