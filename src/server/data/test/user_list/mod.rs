use crate::server::{data::user_list::UserListRepository, model::list::CreateUserListParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_user_and_name;
