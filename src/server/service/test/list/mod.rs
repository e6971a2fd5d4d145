use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::book_list::BookListRepository,
    error::{conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, AppError},
    model::list::{CreateUserListParams, FINISHED_LIST_NAME},
    service::list::ListService,
};

mod add_book;
mod delete_list;
mod queries;
mod remove_book;
