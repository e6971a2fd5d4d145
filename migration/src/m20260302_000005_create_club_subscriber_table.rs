use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000004_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubSubscriber::Table)
                    .if_not_exists()
                    .col(big_integer(ClubSubscriber::UserId))
                    .col(integer(ClubSubscriber::ClubId))
                    .primary_key(
                        Index::create()
                            .name("pk_club_subscriber")
                            .col(ClubSubscriber::UserId)
                            .col(ClubSubscriber::ClubId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_subscriber_club_id")
                            .from(ClubSubscriber::Table, ClubSubscriber::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubSubscriber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubSubscriber {
    Table,
    UserId,
    ClubId,
}
