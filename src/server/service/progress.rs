//! Progress updates and their propagation across a user's lists.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, book_list::BookListRepository, user_list::UserListRepository},
    error::{not_found::NotFoundError, AppError},
    model::progress::{Progress, ProgressSnapshot, ProgressUpdate},
};

pub struct ProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the progress of a book on every list of the list owner that holds it.
    ///
    /// The list only identifies the reader; it does not need to contain the book.
    /// Lists that don't hold the book are left alone, so a valid update can touch no
    /// list at all.
    ///
    /// # Arguments
    /// - `book_id` - Book being read
    /// - `list_id` - Any list of the reader
    /// - `progress_text` - New progress as supplied by the caller
    ///
    /// # Returns
    /// - `Ok(ProgressUpdate)` - Validated progress and the lists that were rewritten
    /// - `Err(AppError::NotFound)` - Unknown list or book
    /// - `Err(AppError::Validation)` - Progress not an integer or outside `0..=pages`
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn update_progress(
        &self,
        book_id: i32,
        list_id: i32,
        progress_text: &str,
    ) -> Result<ProgressUpdate, AppError> {
        let txn = self.db.begin().await?;

        let list = UserListRepository::new(&txn)
            .find_by_id(list_id)
            .await?
            .ok_or(NotFoundError::List(list_id))?;
        let book = BookRepository::new(&txn)
            .find_by_id(book_id)
            .await?
            .ok_or(NotFoundError::Book(book_id))?;

        let progress = Progress::parse(progress_text, book.pages)?;

        let updated_list_ids = propagate(&txn, book.id, list.user_id, progress).await?;

        txn.commit().await?;

        tracing::info!(
            "Set progress of book {} to {} on {} list(s) of user {}",
            book.id,
            progress,
            updated_list_ids.len(),
            list.user_id
        );

        Ok(ProgressUpdate {
            progress,
            updated_list_ids,
        })
    }
}

/// Rewrites the progress of `book_id` on every list of `user_id` that holds it.
///
/// Runs on whatever connection it is given so callers can include it in their own
/// transaction.
///
/// # Returns
/// - `Ok(Vec<i32>)` - IDs of the lists whose entry was rewritten
/// - `Err(DbErr)` - Database error during lookup or update
pub async fn propagate<C: ConnectionTrait>(
    db: &C,
    book_id: i32,
    user_id: i64,
    progress: Progress,
) -> Result<Vec<i32>, DbErr> {
    let user_list_ids: Vec<i32> = UserListRepository::new(db)
        .find_by_user_id(user_id)
        .await?
        .into_iter()
        .map(|list| list.id)
        .collect();

    let entry_repo = BookListRepository::new(db);
    let entries = entry_repo
        .find_by_book_in_lists(book_id, &user_list_ids)
        .await?;

    let planned = ProgressSnapshot {
        book_id,
        user_list_ids,
        entries,
    }
    .propagate(progress);

    for entry in &planned {
        entry_repo.update_progress(entry).await?;
    }

    Ok(planned.into_iter().map(|entry| entry.list_id).collect())
}
