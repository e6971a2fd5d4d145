//! Club subscription data repository.
//!
//! Subscription records are pure relation rows keyed by `(user, club)`. They never
//! change the club's subscriber counter on their own; `ClubService` pairs each insert
//! or delete here with `ClubRepository::adjust_subscribers` in one transaction.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::club::ClubSubscription;

/// Repository providing database operations for club subscriptions.
pub struct ClubSubscriberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubSubscriberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: i64,
        club_id: i32,
    ) -> Result<Option<ClubSubscription>, DbErr> {
        let entity = entity::prelude::ClubSubscriber::find_by_id((user_id, club_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ClubSubscription::from_entity))
    }

    pub async fn create(&self, user_id: i64, club_id: i32) -> Result<ClubSubscription, DbErr> {
        let entity =
            entity::prelude::ClubSubscriber::insert(entity::club_subscriber::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                club_id: ActiveValue::Set(club_id),
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(ClubSubscription::from_entity(entity))
    }

    /// Deletes a subscription, returning whether one existed.
    pub async fn delete(&self, user_id: i64, club_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ClubSubscriber::delete_by_id((user_id, club_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every subscription of a user ordered by club.
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<ClubSubscription>, DbErr> {
        let entities = entity::prelude::ClubSubscriber::find()
            .filter(entity::club_subscriber::Column::UserId.eq(user_id))
            .order_by_asc(entity::club_subscriber::Column::ClubId)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ClubSubscription::from_entity)
            .collect())
    }

    /// Counts the subscription records of a club.
    #[cfg(test)]
    pub async fn count_by_club_id(&self, club_id: i32) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::ClubSubscriber::find()
            .filter(entity::club_subscriber::Column::ClubId.eq(club_id))
            .count(self.db)
            .await
    }

    /// Deletes every subscription of a club.
    pub async fn delete_by_club_id(&self, club_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ClubSubscriber::delete_many()
            .filter(entity::club_subscriber::Column::ClubId.eq(club_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
