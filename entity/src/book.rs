use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub pages: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub synopsis: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_list::Entity")]
    BookList,
}

impl Related<super::book_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
