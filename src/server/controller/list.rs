use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        list::{
            AddBookToListDto, BookListEntryDto, CreateUserListDto, ListWithBooksDto, UserListDto,
        },
    },
    server::{
        error::AppError, model::list::CreateUserListParams, service::list::ListService,
        state::AppState,
    },
};

/// Tag for grouping list endpoints in OpenAPI documentation
pub static LIST_TAG: &str = "list";

#[derive(Deserialize)]
pub struct RemoveBookParams {
    #[serde(rename = "bookId")]
    pub book_id: i32,
}

/// Get all lists of a user.
///
/// # Returns
/// - `200 OK` - Lists ordered by ID
/// - `204 No Content` - The user has no lists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/list",
    tag = LIST_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Lists of the user", body = Vec<UserListDto>),
        (status = 204, description = "The user has no lists"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lists(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let lists = ListService::new(&state.db).get_lists(user_id).await?;

    if lists.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let lists: Vec<UserListDto> = lists.into_iter().map(|list| list.into_dto()).collect();

    Ok((StatusCode::OK, Json(lists)).into_response())
}

/// Create a list for a user.
///
/// Names are not required to be unique; every call creates a new list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Owner of the new list
/// - `payload` - List name and description
///
/// # Returns
/// - `201 Created` - Created list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/list",
    tag = LIST_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    request_body = CreateUserListDto,
    responses(
        (status = 201, description = "List created", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<CreateUserListDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let params = CreateUserListParams::from_dto(user_id, payload);

    let list = service.create_list(params).await?;

    Ok((StatusCode::CREATED, Json(list.into_dto())))
}

/// Get a list and its books.
///
/// A digit-only `list` is a list ID and is resolved regardless of owner; anything
/// else is the exact name of one of the user's lists.
///
/// # Returns
/// - `200 OK` - List with its books in entry order
/// - `204 No Content` - The list has no books
/// - `404 Not Found` - No matching list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/list/{list}",
    tag = LIST_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("list" = String, Path, description = "List ID or list name")
    ),
    responses(
        (status = 200, description = "List with its books", body = ListWithBooksDto),
        (status = 204, description = "The list has no books"),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_list_with_books(
    State(state): State<AppState>,
    Path((user_id, list)): Path<(i64, String)>,
) -> Result<Response, AppError> {
    let list = ListService::new(&state.db)
        .get_list_with_books(user_id, &list)
        .await?;

    if list.books.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((StatusCode::OK, Json(list.into_dto())).into_response())
}

/// Delete a list together with its entries.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/list/{list}",
    tag = LIST_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("list" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List deleted", body = MessageDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    Path((_user_id, list_id)): Path<(i64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    ListService::new(&state.db).delete_list(list_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("List {} deleted", list_id))),
    ))
}

/// Add a book to a list.
///
/// Progress defaults to 0. On a list named "Finished" the progress is always the
/// book's page count. The progress is also applied to the owner's other lists that
/// hold the book.
///
/// # Returns
/// - `201 Created` - Created entry
/// - `400 Bad Request` - Progress not an integer or outside the book's page range
/// - `404 Not Found` - Unknown book or list
/// - `409 Conflict` - The book is already on the list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/lists",
    tag = LIST_TAG,
    request_body = AddBookToListDto,
    responses(
        (status = 201, description = "Book added", body = BookListEntryDto),
        (status = 400, description = "Invalid progress", body = ErrorDto),
        (status = 404, description = "Book or list not found", body = ErrorDto),
        (status = 409, description = "Book already on the list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_book(
    State(state): State<AppState>,
    Json(payload): Json<AddBookToListDto>,
) -> Result<impl IntoResponse, AppError> {
    let entry = ListService::new(&state.db)
        .add_book(payload.list_id, payload.book_id, payload.progress)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Remove a book from a list.
#[utoipa::path(
    delete,
    path = "/api/lists/{list_id}",
    tag = LIST_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("bookId" = i32, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book removed", body = MessageDto),
        (status = 404, description = "Book, list or entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_book(
    State(state): State<AppState>,
    Path(list_id): Path<i32>,
    Query(params): Query<RemoveBookParams>,
) -> Result<impl IntoResponse, AppError> {
    ListService::new(&state.db)
        .remove_book(list_id, params.book_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Book {} removed from list {}",
            params.book_id, list_id
        ))),
    ))
}
