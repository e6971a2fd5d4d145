//! Clubs, subscriptions and scheduled reads.
//!
//! The club's subscriber counter is stored alongside the subscription records. Every
//! subscribe and unsubscribe changes both inside one transaction so the counter always
//! equals the number of records.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{club::ClubRepository, club_subscriber::ClubSubscriberRepository},
    error::{conflict::ConflictError, not_found::NotFoundError, AppError},
    model::club::{read_time_from_millis, Club, ClubSubscription, CreateClubParams, ScheduledRead},
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a club with no subscribers.
    ///
    /// # Returns
    /// - `Ok(Club)` - Created club
    /// - `Err(AppError::Validation)` - Exactly one of book and read time supplied, or
    ///   the read time is not a representable date
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, AppError> {
        let schedule = ScheduledRead::from_parts(params.book_id, params.read_time_millis)?;

        let club = ClubRepository::new(self.db)
            .create(params.name, params.description, params.creator_id, schedule)
            .await?;

        tracing::info!("Created club {} '{}'", club.id, club.name);

        Ok(club)
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_all().await?)
    }

    /// Subscribes a user to a club and bumps its counter.
    ///
    /// # Returns
    /// - `Ok(ClubSubscription)` - Created subscription
    /// - `Err(AppError::NotFound)` - Unknown club
    /// - `Err(AppError::Conflict)` - Already subscribed; the counter is unchanged
    pub async fn subscribe(&self, user_id: i64, club_id: i32) -> Result<ClubSubscription, AppError> {
        let txn = self.db.begin().await?;

        let club_repo = ClubRepository::new(&txn);
        club_repo
            .find_by_id(club_id)
            .await?
            .ok_or(NotFoundError::Club(club_id))?;

        let subscriber_repo = ClubSubscriberRepository::new(&txn);
        if subscriber_repo.find(user_id, club_id).await?.is_some() {
            return Err(ConflictError::AlreadySubscribed { user_id, club_id }.into());
        }

        let club = club_repo.adjust_subscribers(club_id, 1).await?;
        let subscription = subscriber_repo.create(user_id, club_id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} subscribed to club {} ({} subscribers)",
            user_id,
            club_id,
            club.subscribers
        );

        Ok(subscription)
    }

    /// Unsubscribes a user from a club and lowers its counter.
    ///
    /// # Returns
    /// - `Ok(Club)` - Club with the updated counter
    /// - `Err(AppError::NotFound)` - Unknown club, or the user is not subscribed
    pub async fn unsubscribe(&self, user_id: i64, club_id: i32) -> Result<Club, AppError> {
        let txn = self.db.begin().await?;

        let club_repo = ClubRepository::new(&txn);
        club_repo
            .find_by_id(club_id)
            .await?
            .ok_or(NotFoundError::Club(club_id))?;

        let deleted = ClubSubscriberRepository::new(&txn)
            .delete(user_id, club_id)
            .await?;
        if !deleted {
            return Err(NotFoundError::Subscription { user_id, club_id }.into());
        }

        let club = club_repo.adjust_subscribers(club_id, -1).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} unsubscribed from club {} ({} subscribers)",
            user_id,
            club_id,
            club.subscribers
        );

        Ok(club)
    }

    /// Gets the clubs a user is subscribed to, ordered by club ID.
    pub async fn get_subscribed(&self, user_id: i64) -> Result<Vec<Club>, AppError> {
        let club_ids: Vec<i32> = ClubSubscriberRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|subscription| subscription.club_id)
            .collect();

        Ok(ClubRepository::new(self.db).find_by_ids(&club_ids).await?)
    }

    /// Overwrites a club's scheduled book and target date.
    ///
    /// The book is stored as given; it is not looked up.
    pub async fn set_scheduled_read(
        &self,
        club_id: i32,
        book_id: i32,
        read_time_millis: i64,
    ) -> Result<Club, AppError> {
        let read_time = read_time_from_millis(read_time_millis)?;

        let club = ClubRepository::new(self.db)
            .set_schedule(club_id, ScheduledRead { book_id, read_time })
            .await?
            .ok_or(NotFoundError::Club(club_id))?;

        tracing::info!(
            "Scheduled book {} for club {} at {}",
            book_id,
            club_id,
            read_time.to_rfc3339()
        );

        Ok(club)
    }

    /// Deletes a club together with its subscriptions.
    pub async fn delete(&self, club_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let club_repo = ClubRepository::new(&txn);
        club_repo
            .find_by_id(club_id)
            .await?
            .ok_or(NotFoundError::Club(club_id))?;

        let removed = ClubSubscriberRepository::new(&txn)
            .delete_by_club_id(club_id)
            .await?;
        club_repo.delete(club_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted club {} and {} subscriptions", club_id, removed);

        Ok(())
    }
}
