//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db)
///     .title("The Hobbit")
///     .pages(310)
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    pages: i32,
    synopsis: Option<String>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - pages: `250`
    /// - synopsis: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            pages: 250,
            synopsis: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn pages(mut self, pages: i32) -> Self {
        self.pages = pages;
        self
    }

    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            pages: ActiveValue::Set(self.pages),
            synopsis: ActiveValue::Set(self.synopsis),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values (250 pages).
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

/// Creates a book with a specific page count.
pub async fn create_book_with_pages(
    db: &DatabaseConnection,
    pages: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).pages(pages).build().await
}
