//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the progress bounds, list membership and club
//!   subscription rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step mutations inside one database
//!   transaction so a failure part way through leaves nothing behind
//!
//! Every service borrows the shared `DatabaseConnection`. Multi-step operations open a
//! transaction with `TransactionTrait::begin` and run every repository call on it;
//! returning early with an error drops the transaction, which rolls it back.

pub mod book;
pub mod club;
pub mod list;
pub mod progress;

#[cfg(test)]
mod test;
