//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain. They use SeaORM entity
//! models internally and return domain models to keep the data layer separate from the
//! business logic. Every repository is generic over `ConnectionTrait`, so the same
//! repository runs on the pooled connection or inside a `DatabaseTransaction`.

pub mod book;
pub mod book_list;
pub mod club;
pub mod club_subscriber;
pub mod user_list;

#[cfg(test)]
mod test;
