use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string(Club::Name))
                    .col(text(Club::Description))
                    .col(big_integer(Club::CreatorId))
                    .col(integer(Club::Subscribers).default(0))
                    .col(integer_null(Club::BookId))
                    .col(timestamp_null(Club::ReadTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Description,
    CreatorId,
    Subscribers,
    BookId,
    ReadTime,
}
