//! User list fixtures.

use entity::user_list;

/// Creates a list entity model owned by `user_id`.
pub fn entity(id: i32, user_id: i64, name: &str) -> user_list::Model {
    user_list::Model {
        id,
        user_id,
        name: name.to_string(),
        description: String::new(),
    }
}
