//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps the domain errors (validation, not found, conflict) and infrastructure failures,
//! and implements `IntoResponse` so controllers can return it directly.

pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, conflict::ConflictError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Domain variants carry their own response mapping; every other variant is treated as
/// an unexpected failure and answered with a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input. Results in 400 Bad Request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced record does not exist. Results in 404 Not Found.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Uniqueness invariant would be violated. Results in 409 Conflict.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation(err) => {
                tracing::debug!("Rejected request: {}", err);
                err.into_response()
            }
            Self::NotFound(err) => err.into_response(),
            Self::Conflict(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
