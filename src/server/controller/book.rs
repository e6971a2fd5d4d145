use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, CreateBookDto},
        list::{ProgressUpdatedDto, UpdateProgressDto},
    },
    server::{
        error::AppError,
        model::book::CreateBookParams,
        service::{book::BookService, progress::ProgressService},
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Update reading progress of a book.
///
/// Sets the pages read of the book on every list of the list's owner that holds it.
/// The list in the request only identifies the reader.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Book, list and progress text
///
/// # Returns
/// - `200 OK` - Validated progress and the lists that were updated (possibly none)
/// - `400 Bad Request` - Progress not an integer or outside the book's page range
/// - `404 Not Found` - Unknown book or list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books/progress",
    tag = BOOK_TAG,
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress updated", body = ProgressUpdatedDto),
        (status = 400, description = "Invalid progress", body = ErrorDto),
        (status = 404, description = "Book or list not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_progress(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProgressService::new(&state.db);

    let update = service
        .update_progress(payload.book_id, payload.list_id, &payload.progress)
        .await?;

    Ok((StatusCode::OK, Json(update.into_dto())))
}

/// Add a book to the catalogue.
///
/// # Returns
/// - `201 Created` - Created book
/// - `400 Bad Request` - Negative page count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let book = service.create(CreateBookParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

/// Get a book by ID.
#[utoipa::path(
    get,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(&state.db).get_by_id(book_id).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}
