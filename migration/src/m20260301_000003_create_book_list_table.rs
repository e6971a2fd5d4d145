use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_book_table::Book, m20260301_000002_create_user_list_table::UserList,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookList::Table)
                    .if_not_exists()
                    .col(integer(BookList::ListId))
                    .col(integer(BookList::BookId))
                    .col(integer(BookList::Progress).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_book_list")
                            .col(BookList::ListId)
                            .col(BookList::BookId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_list_list_id")
                            .from(BookList::Table, BookList::ListId)
                            .to(UserList::Table, UserList::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_list_book_id")
                            .from(BookList::Table, BookList::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookList {
    Table,
    ListId,
    BookId,
    Progress,
}
