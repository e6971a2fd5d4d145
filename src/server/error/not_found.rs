use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A referenced record does not exist. The variant names which one.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Book {0} doesn't exist")]
    Book(i32),

    /// List looked up by identifier.
    #[error("List {0} doesn't exist")]
    List(i32),

    /// List looked up by owner and name.
    #[error("User {user_id} has no list named '{name}'")]
    ListByName {
        /// Owner used for the lookup
        user_id: i64,
        /// Name used for the lookup
        name: String,
    },

    /// The book is not a member of the list.
    #[error("Book {book_id} is not on list {list_id}")]
    Entry {
        /// List that was searched
        list_id: i32,
        /// Book that was expected on it
        book_id: i32,
    },

    #[error("Club {0} doesn't exist")]
    Club(i32),

    /// The user is not subscribed to the club.
    #[error("User {user_id} is not subscribed to club {club_id}")]
    Subscription {
        /// Subscriber
        user_id: i64,
        /// Club
        club_id: i32,
    },
}

/// Converts not-found errors into 404 Not Found responses.
impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
