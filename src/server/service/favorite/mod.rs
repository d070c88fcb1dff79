//! Favorites service.
//!
//! Owns the validation rules of the favorites workflow: the acting user must exist, the targeted
//! planet or person must exist, and a (user, target) pair is stored at most once. Each mutation
//! performs its checks and its write inside one transaction, which is rolled back on drop when
//! any step returns early.


use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{catalog::CatalogRepository, favorite::FavoriteRepository, user::UserRepository},
        error::{api::ApiError, Error},
        model::favorite::FavoriteTarget,
    },
};

/// Result of adding a favorite which did not fail validation.
#[derive(Debug, PartialEq)]
pub enum AddFavoriteOutcome {
    /// A new favorite row was inserted
    Added(FavoriteDto),
    /// The user already had this favorite; nothing was written
    AlreadyExists,
}

/// Service for managing a user's favorite planets and people.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite of a user ordered by ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites are listed
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, empty when they have none
    /// - `Err(Error::ApiError(ApiError::NotFound))` - The user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(ApiError::NotFound("User not found").into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Adds `target` to the favorites of `user_id`.
    ///
    /// Adding a favorite the user already has is not an error and leaves the stored rows
    /// unchanged. A concurrent insert of the same pair that trips the unique index is reported
    /// the same way.
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome::Added(_))` - The favorite was inserted and committed
    /// - `Ok(AddFavoriteOutcome::AlreadyExists)` - The user already had this favorite
    /// - `Err(Error::ApiError(ApiError::NotFound))` - The user or the target does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<AddFavoriteOutcome, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(ApiError::NotFound("User not found").into());
        }

        let target_exists = match target {
            FavoriteTarget::Planet(planet_id) => {
                CatalogRepository::<_, entity::prelude::Planet>::new(&txn)
                    .get_by_id(planet_id)
                    .await?
                    .is_some()
            }
            FavoriteTarget::Person(people_id) => {
                CatalogRepository::<_, entity::prelude::Person>::new(&txn)
                    .get_by_id(people_id)
                    .await?
                    .is_some()
            }
        };
        if !target_exists {
            return Err(ApiError::NotFound(target.not_found_message()).into());
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        if favorite_repo.find(user_id, target).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = match favorite_repo.create(user_id, target).await {
            Ok(favorite) => favorite,
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(
                    "Favorite {} {:?} of user ID {} was inserted concurrently",
                    target.label(),
                    target,
                    user_id
                );

                return Ok(AddFavoriteOutcome::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        txn.commit().await?;

        Ok(AddFavoriteOutcome::Added(FavoriteDto::from(favorite)))
    }

    /// Removes `target` from the favorites of `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted and committed
    /// - `Err(Error::ApiError(ApiError::NotFound))` - The user has no such favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let favorite_repo = FavoriteRepository::new(&txn);
        let Some(favorite) = favorite_repo.find(user_id, target).await? else {
            return Err(ApiError::NotFound(target.favorite_not_found_message()).into());
        };

        favorite_repo.delete(favorite.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
