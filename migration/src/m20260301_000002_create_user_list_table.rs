use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserList::Table)
                    .if_not_exists()
                    .col(pk_auto(UserList::Id))
                    .col(big_integer(UserList::UserId))
                    .col(string(UserList::Name))
                    .col(text(UserList::Description))
                    .to_owned(),
            )
            .await?;

        // Lists are looked up by (user, name) when resolving a list token
        manager
            .create_index(
                Index::create()
                    .name("idx_user_list_user_id_name")
                    .table(UserList::Table)
                    .col(UserList::UserId)
                    .col(UserList::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserList {
    Table,
    Id,
    UserId,
    Name,
    Description,
}
