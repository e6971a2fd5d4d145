use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::{not_found::NotFoundError, validation::ValidationError, AppError},
    model::book::{Book, CreateBookParams},
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a book to the catalogue.
    ///
    /// # Returns
    /// - `Ok(Book)` - Created book
    /// - `Err(AppError::Validation)` - Negative page count
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        if params.pages < 0 {
            return Err(ValidationError::NegativePages(params.pages).into());
        }

        let book = BookRepository::new(self.db).create(params).await?;

        tracing::info!("Created book {} '{}'", book.id, book.title);

        Ok(book)
    }

    /// Gets a book by ID, failing with `NotFoundError::Book` if it doesn't exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::Book(id))?;

        Ok(book)
    }
}
