//! Book list entry fixtures.

use entity::book_list;

/// Creates an entry entity model for the `(list_id, book_id)` pair.
pub fn entity(list_id: i32, book_id: i32, progress: i32) -> book_list::Model {
    book_list::Model {
        list_id,
        book_id,
        progress,
    }
}
