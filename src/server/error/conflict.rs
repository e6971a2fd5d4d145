use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// The operation would violate a uniqueness invariant.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Book {book_id} is already on list {list_id}")]
    AlreadyInList {
        /// Target list
        list_id: i32,
        /// Book being added
        book_id: i32,
    },

    #[error("User {user_id} is already subscribed to club {club_id}")]
    AlreadySubscribed {
        /// Subscriber
        user_id: i64,
        /// Club
        club_id: i32,
    },
}

/// Converts conflict errors into 409 Conflict responses.
impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
