//! Book fixtures.

use entity::book;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "Test Book";

/// Default page count for fixture books.
pub const DEFAULT_PAGES: i32 = 250;

/// Creates a book entity model with id `1` and 250 pages.
pub fn entity() -> book::Model {
    book::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
        author: "Test Author".to_string(),
        pages: DEFAULT_PAGES,
        synopsis: None,
    }
}

/// Creates a book entity model with the given id and page count.
pub fn entity_with_pages(id: i32, pages: i32) -> book::Model {
    book::Model {
        id,
        pages,
        ..entity()
    }
}
