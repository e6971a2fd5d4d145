//! SeaORM entity models for the reading tracker schema.

pub mod prelude;

pub mod book;
pub mod book_list;
pub mod club;
pub mod club_subscriber;
pub mod user_list;
