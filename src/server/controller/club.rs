use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        club::{ClubDto, ClubSubscriptionDto, CreateClubDto, ScheduleReadDto},
    },
    server::{
        error::AppError, model::club::CreateClubParams, service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

#[derive(Deserialize)]
pub struct SubscriptionParams {
    pub user_id: i64,
    pub club_id: i32,
}

/// Create a club.
///
/// A scheduled read is optional, but the book and the read time must be supplied
/// together.
///
/// # Returns
/// - `201 Created` - Created club with no subscribers
/// - `400 Bad Request` - Only one half of the schedule supplied
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created", body = ClubDto),
        (status = 400, description = "Inconsistent schedule", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let club = service.create(CreateClubParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// Get all clubs.
#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).get_all().await?;

    let clubs: Vec<ClubDto> = clubs.into_iter().map(|club| club.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// Set the scheduled read of a club.
///
/// Overwrites any existing schedule. The book is stored as given.
///
/// # Returns
/// - `200 OK` - Updated club
/// - `400 Bad Request` - Date is not representable
/// - `404 Not Found` - Unknown club
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = ScheduleReadDto,
    responses(
        (status = 200, description = "Schedule updated", body = ClubDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_scheduled_read(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleReadDto>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .set_scheduled_read(payload.club_id, payload.book_id, payload.date)
        .await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Subscribe a user to a club.
///
/// # Returns
/// - `201 Created` - Created subscription
/// - `404 Not Found` - Unknown club
/// - `409 Conflict` - Already subscribed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs/subscribe",
    tag = CLUB_TAG,
    params(
        ("user_id" = i64, Query, description = "Subscribing user ID"),
        ("club_id" = i32, Query, description = "Club ID")
    ),
    responses(
        (status = 201, description = "Subscribed", body = ClubSubscriptionDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Query(params): Query<SubscriptionParams>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = ClubService::new(&state.db)
        .subscribe(params.user_id, params.club_id)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

/// Unsubscribe a user from a club.
#[utoipa::path(
    delete,
    path = "/api/clubs/unsubscribe",
    tag = CLUB_TAG,
    params(
        ("user_id" = i64, Query, description = "Subscribed user ID"),
        ("club_id" = i32, Query, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Unsubscribed", body = MessageDto),
        (status = 404, description = "Club not found or user not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Query(params): Query<SubscriptionParams>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .unsubscribe(params.user_id, params.club_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "User {} unsubscribed from club {}",
            params.user_id, club.id
        ))),
    ))
}

/// Get the clubs a user is subscribed to.
#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i64, Path, description = "Subscribed user ID")
    ),
    responses(
        (status = 200, description = "Subscribed clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscribed_clubs(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).get_subscribed(user_id).await?;

    let clubs: Vec<ClubDto> = clubs.into_iter().map(|club| club.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// Delete a club together with its subscriptions.
#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club deleted", body = MessageDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db).delete(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Club {} deleted", club_id))),
    ))
}
