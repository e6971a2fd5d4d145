//! Data transfer objects shared by the HTTP surface.

pub mod api;
pub mod book;
pub mod club;
pub mod list;
