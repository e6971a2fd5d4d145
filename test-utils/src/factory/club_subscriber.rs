//! Club subscription factory.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a subscription record without touching the club's counter.
///
/// Use together with `ClubFactory::subscribers` to build a consistent state.
pub async fn create_club_subscriber(
    db: &DatabaseConnection,
    user_id: i64,
    club_id: i32,
) -> Result<entity::club_subscriber::Model, DbErr> {
    entity::prelude::ClubSubscriber::insert(entity::club_subscriber::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        club_id: ActiveValue::Set(club_id),
    })
    .exec_with_returning(db)
    .await
}
