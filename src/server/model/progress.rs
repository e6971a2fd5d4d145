//! Reading progress and its propagation across a user's lists.
//!
//! Progress is carried as text at the HTTP edge and as a bounded integer everywhere
//! else. `Progress` can only be built through [`Progress::parse`] or
//! [`Progress::complete`], so any value that reaches the data layer already satisfies
//! `0 <= progress <= pages` for the book it was validated against.

use std::{collections::HashSet, fmt};

use crate::{
    model::list::ProgressUpdatedDto,
    server::{
        error::validation::ValidationError,
        model::{book::Book, list::BookListEntry},
    },
};

/// Pages read of a book, validated against the book's page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(i32);

impl Progress {
    /// Parses progress text and checks it against the book's page count.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Arguments
    /// - `text` - Progress as supplied by the caller, e.g. `"80"`
    /// - `pages` - Page count of the book the progress refers to
    ///
    /// # Returns
    /// - `Ok(Progress)` - Value within `0..=pages`
    /// - `Err(ValidationError::MalformedProgress)` - Text is not an integer
    /// - `Err(ValidationError::ProgressOutOfRange)` - Value is negative or above `pages`
    pub fn parse(text: &str, pages: i32) -> Result<Self, ValidationError> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::MalformedProgress {
                value: text.to_string(),
            })?;

        if value < 0 || value > i64::from(pages) {
            return Err(ValidationError::ProgressOutOfRange {
                progress: value,
                pages,
            });
        }

        // value is within 0..=pages, which fits in i32
        Ok(Self(value as i32))
    }

    /// Progress marking the book as fully read.
    pub fn complete(book: &Book) -> Self {
        Self(book.pages.max(0))
    }

    /// Rebuilds progress from a stored entry without re-validating it.
    pub(crate) fn from_stored(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state propagation works on: one book, the lists of its reader, and every
/// existing entry for that book among those lists.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    pub book_id: i32,
    /// Identifiers of every list owned by the user.
    pub user_list_ids: Vec<i32>,
    pub entries: Vec<BookListEntry>,
}

impl ProgressSnapshot {
    /// Plans the entries to rewrite so every list of the user holding the book
    /// carries `progress`.
    ///
    /// Entries for other books or for lists the user does not own are dropped. Lists
    /// without an entry for the book produce nothing; propagation never creates entries.
    pub fn propagate(self, progress: Progress) -> Vec<BookListEntry> {
        let owned: HashSet<i32> = self.user_list_ids.into_iter().collect();
        let book_id = self.book_id;

        self.entries
            .into_iter()
            .filter(|entry| entry.book_id == book_id && owned.contains(&entry.list_id))
            .map(|entry| BookListEntry { progress, ..entry })
            .collect()
    }
}

/// Outcome of a progress update.
///
/// An empty `updated_list_ids` means the value was valid but no list of the user
/// currently holds the book.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub progress: Progress,
    pub updated_list_ids: Vec<i32>,
}

impl ProgressUpdate {
    pub fn into_dto(self) -> ProgressUpdatedDto {
        ProgressUpdatedDto {
            progress: self.progress.to_string(),
            updated_list_ids: self.updated_list_ids,
        }
    }
}
