use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub synopsis: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub pages: i32,
    #[serde(default)]
    pub synopsis: Option<String>,
}
