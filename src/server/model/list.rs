//! User list and list entry domain models.

use crate::{
    model::list::{BookListEntryDto, ListWithBooksDto, UserListDto},
    server::model::{book::Book, progress::Progress},
};

/// Name of the list that marks its books as completely read.
pub const FINISHED_LIST_NAME: &str = "Finished";

/// A named, user-owned collection of books.
#[derive(Debug, Clone, PartialEq)]
pub struct UserList {
    pub id: i32,
    /// Owner of the list.
    pub user_id: i64,
    pub name: String,
    pub description: String,
}

impl UserList {
    pub fn from_entity(entity: entity::user_list::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> UserListDto {
        UserListDto {
            list_id: self.id,
            user_id: self.user_id,
            list_name: self.name,
            list_description: self.description,
        }
    }

    /// Whether books added to this list start out fully read.
    pub fn is_finished(&self) -> bool {
        self.name == FINISHED_LIST_NAME
    }
}

/// Parameters for creating a list. Names are not required to be unique.
#[derive(Debug, Clone)]
pub struct CreateUserListParams {
    pub user_id: i64,
    pub name: String,
    pub description: String,
}

impl CreateUserListParams {
    pub fn from_dto(user_id: i64, dto: crate::model::list::CreateUserListDto) -> Self {
        Self {
            user_id,
            name: dto.list_name,
            description: dto.list_description,
        }
    }
}

/// Membership of a book in a list with the pages read so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListEntry {
    pub list_id: i32,
    pub book_id: i32,
    pub progress: Progress,
}

impl BookListEntry {
    pub fn from_entity(entity: entity::book_list::Model) -> Self {
        Self {
            list_id: entity.list_id,
            book_id: entity.book_id,
            progress: Progress::from_stored(entity.progress),
        }
    }

    pub fn into_dto(self) -> BookListEntryDto {
        BookListEntryDto {
            list_id: self.list_id,
            book_id: self.book_id,
            progress: self.progress.to_string(),
        }
    }
}

/// How a caller referred to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRef {
    /// Global list identifier; the owner is not consulted.
    Id(i32),
    /// Exact list name within the requesting user's lists.
    Name(String),
}

impl ListRef {
    /// Interprets a path token as a list identifier when it is made only of ASCII
    /// digits and fits an identifier, and as a list name otherwise.
    pub fn parse(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = token.parse::<i32>() {
                return Self::Id(id);
            }
        }

        Self::Name(token.to_string())
    }
}

/// A resolved list with the books its entries reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ListWithBooks {
    pub list: UserList,
    /// Books in entry storage order.
    pub books: Vec<Book>,
}

impl ListWithBooks {
    pub fn into_dto(self) -> ListWithBooksDto {
        ListWithBooksDto {
            list_name: self.list.name,
            list_description: self.list.description,
            books: self.books.into_iter().map(Book::into_dto).collect(),
        }
    }
}
