//! HTTP request handlers.
//!
//! Controllers extract path, query and body values, convert DTOs into parameters,
//! call a service and convert the domain result back into a DTO. Errors propagate as
//! `AppError`, which maps itself to a status code and `ErrorDto` body.

pub mod book;
pub mod club;
pub mod list;
