//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of pure logic and for conversion tests.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let book = fixture::book::entity();
//! let entry = fixture::book_list::entity(3, book.id, 10);
//! ```

pub mod book;
pub mod book_list;
pub mod user_list;
