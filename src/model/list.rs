use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::book::BookDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub list_id: i32,
    pub user_id: i64,
    pub list_name: String,
    pub list_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserListDto {
    pub list_name: String,
    #[serde(default)]
    pub list_description: String,
}

/// A list together with the books it references, in entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListWithBooksDto {
    pub list_name: String,
    pub list_description: String,
    pub books: Vec<BookDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookListEntryDto {
    pub list_id: i32,
    pub book_id: i32,
    /// Pages read, transmitted as text.
    pub progress: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddBookToListDto {
    pub book_id: i32,
    pub list_id: i32,
    #[serde(default, deserialize_with = "deserialize_optional_progress_text")]
    pub progress: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProgressDto {
    pub book_id: i32,
    pub list_id: i32,
    #[serde(deserialize_with = "deserialize_progress_text")]
    pub progress: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressUpdatedDto {
    pub progress: String,
    /// Lists whose entry for the book now carries `progress`.
    pub updated_list_ids: Vec<i32>,
}

/// Accepts `"80"` as well as `80`; range checks happen in the service layer.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProgressText {
    Text(String),
    Number(i64),
}

impl From<ProgressText> for String {
    fn from(value: ProgressText) -> Self {
        match value {
            ProgressText::Text(text) => text,
            ProgressText::Number(number) => number.to_string(),
        }
    }
}

fn deserialize_progress_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ProgressText::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_progress_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ProgressText>::deserialize(deserializer)?.map(String::from))
}
