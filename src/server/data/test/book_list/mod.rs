use crate::server::{
    data::book_list::BookListRepository,
    model::{list::BookListEntry, progress::Progress},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update_progress;
