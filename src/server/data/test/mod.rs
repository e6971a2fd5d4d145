mod book_list;
mod club;
mod user_list;
