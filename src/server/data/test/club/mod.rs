use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::club::ClubRepository, model::club::ScheduledRead};

mod adjust_subscribers;
mod create;
mod set_schedule;
