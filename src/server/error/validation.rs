use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Malformed or out-of-range input supplied by the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Progress text is not an integer.
    #[error("Invalid progress '{value}': progress must be a whole number of pages")]
    MalformedProgress {
        /// The rejected text
        value: String,
    },

    /// Progress lies outside `0..=pages` for the book.
    #[error("Invalid progress {progress}: progress must be between 0 and {pages} pages")]
    ProgressOutOfRange {
        /// The rejected value
        progress: i64,
        /// Page count of the book
        pages: i32,
    },

    /// A club was given a scheduled book without a target date.
    #[error("Inconsistent schedule: a scheduled book requires a read time")]
    BookWithoutReadTime,

    /// A club was given a target date without a scheduled book.
    #[error("Inconsistent schedule: a read time requires a scheduled book")]
    ReadTimeWithoutBook,

    /// Epoch milliseconds outside the representable date range.
    #[error("Invalid read time {0}: not a representable date")]
    InvalidReadTime(i64),

    /// Negative page count for a new book.
    #[error("Invalid page count {0}: a book cannot have negative pages")]
    NegativePages(i32),
}

/// Converts validation errors into 400 Bad Request responses carrying the reason.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
