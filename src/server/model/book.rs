//! Book domain models and parameters.

use crate::model::book::{BookDto, CreateBookDto};

/// A catalogue book. Its page count bounds reading progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Total page count of the book.
    pub pages: i32,
    pub synopsis: Option<String>,
}

impl Book {
    /// Converts an entity model to a book domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            pages: entity.pages,
            synopsis: entity.synopsis,
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            pages: self.pages,
            synopsis: self.synopsis,
        }
    }
}

/// Parameters for adding a book to the catalogue.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub synopsis: Option<String>,
}

impl CreateBookParams {
    pub fn from_dto(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            pages: dto.pages,
            synopsis: dto.synopsis,
        }
    }
}
