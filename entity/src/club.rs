use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub creator_id: i64,
    pub subscribers: i32,
    /// Scheduled book; set together with `read_time`.
    pub book_id: Option<i32>,
    pub read_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_subscriber::Entity")]
    ClubSubscriber,
}

impl Related<super::club_subscriber::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubSubscriber.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
