//! Club domain models and parameters.
//!
//! A club's scheduled read is either fully present (book and target date) or absent.
//! [`ScheduledRead`] keeps the two halves together so a half-set schedule cannot be
//! represented past the validation in [`ScheduledRead::from_parts`].

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::club::{ClubDto, ClubSubscriptionDto, CreateClubDto},
    server::error::validation::ValidationError,
};

/// A book a club plans to have read by a target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRead {
    pub book_id: i32,
    pub read_time: DateTime<Utc>,
}

impl ScheduledRead {
    /// Builds a schedule from the optional halves supplied by a caller.
    ///
    /// # Returns
    /// - `Ok(Some(ScheduledRead))` - Both halves supplied
    /// - `Ok(None)` - Neither supplied
    /// - `Err(ValidationError::BookWithoutReadTime)` - Only the book supplied
    /// - `Err(ValidationError::ReadTimeWithoutBook)` - Only the read time supplied
    /// - `Err(ValidationError::InvalidReadTime)` - Read time is not a representable date
    pub fn from_parts(
        book_id: Option<i32>,
        read_time_millis: Option<i64>,
    ) -> Result<Option<Self>, ValidationError> {
        match (book_id, read_time_millis) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ValidationError::BookWithoutReadTime),
            (None, Some(_)) => Err(ValidationError::ReadTimeWithoutBook),
            (Some(book_id), Some(millis)) => Ok(Some(Self {
                book_id,
                read_time: read_time_from_millis(millis)?,
            })),
        }
    }
}

/// Converts epoch milliseconds to a UTC timestamp.
pub fn read_time_from_millis(millis: i64) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::from_timestamp_millis(millis).ok_or(ValidationError::InvalidReadTime(millis))
}

/// A shared-reading group.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub creator_id: i64,
    /// Number of subscription records for this club.
    pub subscribers: i32,
    pub schedule: Option<ScheduledRead>,
}

impl Club {
    /// Converts an entity model to a club domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Club)` - Converted club
    /// - `Err(DbErr::Custom)` - The stored row has only one half of the schedule
    pub fn from_entity(entity: entity::club::Model) -> Result<Self, DbErr> {
        let schedule = match (entity.book_id, entity.read_time) {
            (Some(book_id), Some(read_time)) => Some(ScheduledRead { book_id, read_time }),
            (None, None) => None,
            _ => {
                return Err(DbErr::Custom(format!(
                    "Club {} has an incomplete scheduled read",
                    entity.id
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            creator_id: entity.creator_id,
            subscribers: entity.subscribers,
            schedule,
        })
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            club_id: self.id,
            club_name: self.name,
            club_description: self.description,
            creator: self.creator_id,
            subscribers: self.subscribers,
            book_id: self.schedule.as_ref().map(|s| s.book_id),
            read_time: self.schedule.map(|s| s.read_time.timestamp_millis()),
        }
    }
}

/// Parameters for creating a club, before schedule validation.
#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub name: String,
    pub description: String,
    pub creator_id: i64,
    pub book_id: Option<i32>,
    /// Target date in epoch milliseconds.
    pub read_time_millis: Option<i64>,
}

impl CreateClubParams {
    pub fn from_dto(dto: CreateClubDto) -> Self {
        Self {
            name: dto.club_name,
            description: dto.club_description,
            creator_id: dto.creator,
            book_id: dto.book_id,
            read_time_millis: dto.read_time,
        }
    }
}

/// Subscription of a user to a club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubSubscription {
    pub user_id: i64,
    pub club_id: i32,
}

impl ClubSubscription {
    pub fn from_entity(entity: entity::club_subscriber::Model) -> Self {
        Self {
            user_id: entity.user_id,
            club_id: entity.club_id,
        }
    }

    pub fn into_dto(self) -> ClubSubscriptionDto {
        ClubSubscriptionDto {
            user_id: self.user_id,
            club_id: self.club_id,
        }
    }
}
