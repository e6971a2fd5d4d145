//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a book placed in a freshly created list for the given user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the new list
/// - `progress` - Pages read stored on the entry
///
/// # Returns
/// - `Ok((book, list, entry))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_in_list(
    db: &DatabaseConnection,
    user_id: i64,
    progress: i32,
) -> Result<
    (
        entity::book::Model,
        entity::user_list::Model,
        entity::book_list::Model,
    ),
    DbErr,
> {
    let book = crate::factory::book::create_book(db).await?;
    let list = crate::factory::user_list::create_user_list(db, user_id).await?;
    let entry = crate::factory::book_list::create_book_list(db, list.id, book.id, progress).await?;

    Ok((book, list, entry))
}
