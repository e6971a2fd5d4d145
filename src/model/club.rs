use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubDto {
    pub club_id: i32,
    pub club_name: String,
    pub club_description: String,
    pub creator: i64,
    pub subscribers: i32,
    pub book_id: Option<i32>,
    /// Target date of the scheduled read in epoch milliseconds.
    pub read_time: Option<i64>,
}

/// Request body for club creation.
///
/// `book_id` and `read_time` must be supplied together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClubDto {
    pub club_name: String,
    #[serde(default)]
    pub club_description: String,
    pub creator: i64,
    #[serde(default)]
    pub book_id: Option<i32>,
    #[serde(default)]
    pub read_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleReadDto {
    pub book_id: i32,
    pub club_id: i32,
    /// Epoch milliseconds.
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubSubscriptionDto {
    pub user_id: i64,
    pub club_id: i32,
}
