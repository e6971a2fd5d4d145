//! Club data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::club::{Club, ScheduledRead};

/// Repository providing database operations for clubs.
pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new club with zero subscribers.
    pub async fn create(
        &self,
        name: String,
        description: String,
        creator_id: i64,
        schedule: Option<ScheduledRead>,
    ) -> Result<Club, DbErr> {
        let (book_id, read_time) = match schedule {
            Some(schedule) => (Some(schedule.book_id), Some(schedule.read_time)),
            None => (None, None),
        };

        let entity = entity::prelude::Club::insert(entity::club::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            creator_id: ActiveValue::Set(creator_id),
            subscribers: ActiveValue::Set(0),
            book_id: ActiveValue::Set(book_id),
            read_time: ActiveValue::Set(read_time),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Club::from_entity(entity)
    }

    /// Gets all clubs ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Club::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        entity::prelude::Club::find_by_id(id)
            .one(self.db)
            .await?
            .map(Club::from_entity)
            .transpose()
    }

    /// Gets the clubs whose ID is in `ids`, ordered by ID.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Club>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Club::find()
            .filter(entity::club::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::club::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Club::from_entity)
            .collect()
    }

    /// Overwrites the scheduled read of a club.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - Updated club
    /// - `Ok(None)` - No club with that ID
    pub async fn set_schedule(
        &self,
        id: i32,
        schedule: ScheduledRead,
    ) -> Result<Option<Club>, DbErr> {
        let Some(club) = entity::prelude::Club::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::club::ActiveModel = club.into();
        active_model.book_id = ActiveValue::Set(Some(schedule.book_id));
        active_model.read_time = ActiveValue::Set(Some(schedule.read_time));

        let updated = active_model.update(self.db).await?;

        Club::from_entity(updated).map(Some)
    }

    /// Adds `delta` to the subscriber counter, never going below zero.
    ///
    /// Read-modify-write; run it inside the same transaction as the matching
    /// subscription insert or delete.
    pub async fn adjust_subscribers(&self, id: i32, delta: i32) -> Result<Club, DbErr> {
        let club = entity::prelude::Club::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Club with id {} not found", id)))?;

        let subscribers = club.subscribers.saturating_add(delta).max(0);

        let mut active_model: entity::club::ActiveModel = club.into();
        active_model.subscribers = ActiveValue::Set(subscribers);

        let updated = active_model.update(self.db).await?;

        Club::from_entity(updated)
    }

    /// Deletes a club.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Club::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
