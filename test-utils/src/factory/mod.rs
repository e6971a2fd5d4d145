//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let book = factory::create_book(&db).await?;
//! let list = factory::create_user_list(&db, 7).await?;
//! factory::create_book_list(&db, list.id, book.id, 0).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db)
//!     .title("Dune")
//!     .pages(412)
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod book_list;
pub mod club;
pub mod club_subscriber;
pub mod helpers;
pub mod user_list;

pub use book::{create_book, create_book_with_pages};
pub use book_list::create_book_list;
pub use club::create_club;
pub use club_subscriber::create_club_subscriber;
pub use user_list::{create_user_list, create_user_list_named};
