//! Route table and OpenAPI document.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        book::{BookDto, CreateBookDto},
        club::{ClubDto, ClubSubscriptionDto, CreateClubDto, ScheduleReadDto},
        list::{
            AddBookToListDto, BookListEntryDto, CreateUserListDto, ListWithBooksDto,
            ProgressUpdatedDto, UpdateProgressDto, UserListDto,
        },
    },
    server::{
        controller::{book, club, list},
        state::AppState,
    },
};

/// OpenAPI document for the REST API, served by Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lectio API",
        description = "Book lists, reading progress and book clubs."
    ),
    paths(
        list::get_lists,
        list::create_list,
        list::get_list_with_books,
        list::delete_list,
        list::add_book,
        list::remove_book,
        book::update_progress,
        book::create_book,
        book::get_book,
        club::create_club,
        club::get_clubs,
        club::set_scheduled_read,
        club::subscribe,
        club::unsubscribe,
        club::get_subscribed_clubs,
        club::delete_club,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        BookDto,
        CreateBookDto,
        UserListDto,
        CreateUserListDto,
        ListWithBooksDto,
        BookListEntryDto,
        AddBookToListDto,
        UpdateProgressDto,
        ProgressUpdatedDto,
        ClubDto,
        CreateClubDto,
        ScheduleReadDto,
        ClubSubscriptionDto,
    )),
    tags(
        (name = "list", description = "User lists and list membership"),
        (name = "book", description = "Books and reading progress"),
        (name = "club", description = "Book clubs and subscriptions")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Sibling routes share one parameter name per segment, so `{list}` carries either a
/// list ID or name and `{id}` under `/api/clubs` is a user ID for `GET` and a club ID
/// for `DELETE`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users/{user_id}/list",
            get(list::get_lists).post(list::create_list),
        )
        .route(
            "/api/users/{user_id}/list/{list}",
            get(list::get_list_with_books).delete(list::delete_list),
        )
        .route("/api/lists", post(list::add_book))
        .route("/api/lists/{list_id}", delete(list::remove_book))
        .route("/api/books", post(book::create_book))
        .route("/api/books/progress", post(book::update_progress))
        .route("/api/books/{book_id}", get(book::get_book))
        .route(
            "/api/clubs",
            get(club::get_clubs)
                .post(club::create_club)
                .put(club::set_scheduled_read),
        )
        .route("/api/clubs/subscribe", post(club::subscribe))
        .route("/api/clubs/unsubscribe", delete(club::unsubscribe))
        .route(
            "/api/clubs/{id}",
            get(club::get_subscribed_clubs).delete(club::delete_club),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
