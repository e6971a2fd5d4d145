pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_book_table;
mod m20260301_000002_create_user_list_table;
mod m20260301_000003_create_book_list_table;
mod m20260302_000004_create_club_table;
mod m20260302_000005_create_club_subscriber_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_book_table::Migration),
            Box::new(m20260301_000002_create_user_list_table::Migration),
            Box::new(m20260301_000003_create_book_list_table::Migration),
            Box::new(m20260302_000004_create_club_table::Migration),
            Box::new(m20260302_000005_create_club_subscriber_table::Migration),
        ]
    }
}
