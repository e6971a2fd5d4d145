pub use super::book::Entity as Book;
pub use super::book_list::Entity as BookList;
pub use super::club::Entity as Club;
pub use super::club_subscriber::Entity as ClubSubscriber;
pub use super::user_list::Entity as UserList;
