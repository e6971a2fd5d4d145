//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Rules that only depend on the
//! values involved (progress bounds, schedule consistency, propagation planning)
//! live here so they can be tested without a database.

pub mod book;
pub mod club;
pub mod list;
pub mod progress;
