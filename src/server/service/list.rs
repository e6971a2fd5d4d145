//! List membership and list queries.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, book_list::BookListRepository, user_list::UserListRepository},
    error::{conflict::ConflictError, not_found::NotFoundError, AppError},
    model::{
        book::Book,
        list::{BookListEntry, CreateUserListParams, ListRef, ListWithBooks, UserList},
        progress::Progress,
    },
    service::progress::propagate,
};

/// Progress recorded when a book is added without one.
const DEFAULT_PROGRESS: &str = "0";

pub struct ListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a list for a user. Names are not checked for uniqueness.
    pub async fn create_list(&self, params: CreateUserListParams) -> Result<UserList, AppError> {
        let list = UserListRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created list {} '{}' for user {}",
            list.id,
            list.name,
            list.user_id
        );

        Ok(list)
    }

    /// Gets every list of a user ordered by ID.
    pub async fn get_lists(&self, user_id: i64) -> Result<Vec<UserList>, AppError> {
        Ok(UserListRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?)
    }

    /// Adds a book to a list.
    ///
    /// The progress is validated and propagated to the owner's other lists holding the
    /// book before the entry is inserted, all in one transaction. A list named
    /// "Finished" ignores the supplied progress and records the book's page count.
    ///
    /// # Arguments
    /// - `list_id` - Target list
    /// - `book_id` - Book to add
    /// - `progress` - Pages read; `"0"` when absent
    ///
    /// # Returns
    /// - `Ok(BookListEntry)` - Created entry
    /// - `Err(AppError::NotFound)` - Unknown list or book
    /// - `Err(AppError::Validation)` - Progress not an integer or outside `0..=pages`
    /// - `Err(AppError::Conflict)` - Book already on the list; nothing is written
    pub async fn add_book(
        &self,
        list_id: i32,
        book_id: i32,
        progress: Option<String>,
    ) -> Result<BookListEntry, AppError> {
        let txn = self.db.begin().await?;

        let list = UserListRepository::new(&txn)
            .find_by_id(list_id)
            .await?
            .ok_or(NotFoundError::List(list_id))?;
        let book = BookRepository::new(&txn)
            .find_by_id(book_id)
            .await?
            .ok_or(NotFoundError::Book(book_id))?;

        let progress = if list.is_finished() {
            Progress::complete(&book)
        } else {
            Progress::parse(progress.as_deref().unwrap_or(DEFAULT_PROGRESS), book.pages)?
        };

        propagate(&txn, book.id, list.user_id, progress).await?;

        let entry_repo = BookListRepository::new(&txn);
        if entry_repo.find(list.id, book.id).await?.is_some() {
            return Err(ConflictError::AlreadyInList {
                list_id: list.id,
                book_id: book.id,
            }
            .into());
        }

        let entry = entry_repo.create(list.id, book.id, progress).await?;

        txn.commit().await?;

        tracing::info!(
            "Added book {} to list {} with progress {}",
            entry.book_id,
            entry.list_id,
            entry.progress
        );

        Ok(entry)
    }

    /// Removes a book from a list.
    ///
    /// Checks run in order: book exists, list exists, book is on the list.
    pub async fn remove_book(&self, list_id: i32, book_id: i32) -> Result<(), AppError> {
        BookRepository::new(self.db)
            .find_by_id(book_id)
            .await?
            .ok_or(NotFoundError::Book(book_id))?;
        UserListRepository::new(self.db)
            .find_by_id(list_id)
            .await?
            .ok_or(NotFoundError::List(list_id))?;

        let deleted = BookListRepository::new(self.db)
            .delete(list_id, book_id)
            .await?;
        if !deleted {
            return Err(NotFoundError::Entry { list_id, book_id }.into());
        }

        tracing::info!("Removed book {} from list {}", book_id, list_id);

        Ok(())
    }

    /// Resolves a list from a path token.
    ///
    /// A digit-only token is a global list ID and is resolved without regard to the
    /// requesting user. Any other token is an exact list name among `user_id`'s lists.
    ///
    /// # Returns
    /// - `Ok(UserList)` - Resolved list
    /// - `Err(AppError::NotFound)` - No matching list, or the match has an empty name
    pub async fn resolve_list(&self, user_id: i64, token: &str) -> Result<UserList, AppError> {
        let repo = UserListRepository::new(self.db);

        match ListRef::parse(token) {
            ListRef::Id(id) => {
                let list = repo.find_by_id(id).await?.ok_or(NotFoundError::List(id))?;

                if list.user_id != user_id {
                    tracing::warn!(
                        "User {} resolved list {} owned by user {}",
                        user_id,
                        list.id,
                        list.user_id
                    );
                }

                Ok(list)
            }
            ListRef::Name(name) => {
                let list = repo
                    .find_by_user_and_name(user_id, &name)
                    .await?
                    .filter(|list| !list.name.is_empty())
                    .ok_or(NotFoundError::ListByName { user_id, name })?;

                Ok(list)
            }
        }
    }

    /// Gets the books on a list in entry storage order.
    pub async fn list_books(&self, list: &UserList) -> Result<Vec<Book>, AppError> {
        let entries = BookListRepository::new(self.db)
            .find_by_list_id(list.id)
            .await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let book_ids: Vec<i32> = entries.iter().map(|entry| entry.book_id).collect();
        let mut books: HashMap<i32, Book> = BookRepository::new(self.db)
            .find_by_ids(&book_ids)
            .await?
            .into_iter()
            .map(|book| (book.id, book))
            .collect();

        Ok(book_ids
            .into_iter()
            .filter_map(|id| books.remove(&id))
            .collect())
    }

    /// Resolves a list from a path token and loads its books.
    pub async fn get_list_with_books(
        &self,
        user_id: i64,
        token: &str,
    ) -> Result<ListWithBooks, AppError> {
        let list = self.resolve_list(user_id, token).await?;
        let books = self.list_books(&list).await?;

        Ok(ListWithBooks { list, books })
    }

    /// Deletes a list together with its entries.
    pub async fn delete_list(&self, list_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let list_repo = UserListRepository::new(&txn);
        list_repo
            .find_by_id(list_id)
            .await?
            .ok_or(NotFoundError::List(list_id))?;

        let removed = BookListRepository::new(&txn)
            .delete_by_list_id(list_id)
            .await?;
        list_repo.delete(list_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted list {} and {} entries", list_id, removed);

        Ok(())
    }
}
