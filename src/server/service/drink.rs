use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drink::DrinkRepository, favorite::FavoriteRepository},
    error::{tracking::TrackingError, Error},
};

/// Search terms shorter than this (after trimming) return nothing.
const MIN_SEARCH_TERM_LEN: usize = 2;
/// How many drinks a search returns at most.
const SEARCH_RESULT_LIMIT: u64 = 20;

pub struct DrinkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrinkService<'a> {
    /// Creates a new instance of [`DrinkService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Search the drink catalog by name
    ///
    /// Terms shorter than two characters after trimming return an empty list
    /// without querying storage. Matches are case-insensitive substring
    /// matches ordered with the user's own custom drinks before global
    /// drinks, alphabetically within each group; the ordering is part of the
    /// repository query so the result cap cannot push out an owned drink.
    pub async fn search(
        &self,
        user_id: &str,
        term: &str,
    ) -> Result<Vec<entity::drink::Model>, Error> {
        let term = term.trim();
        if term.chars().count() < MIN_SEARCH_TERM_LEN {
            return Ok(Vec::new());
        }

        let drink_repository = DrinkRepository::new(self.db);

        Ok(drink_repository
            .search_by_name(user_id, term, SEARCH_RESULT_LIMIT)
            .await?)
    }

    /// Create a custom drink owned by the user
    pub async fn create_drink(
        &self,
        user_id: &str,
        name: &str,
        caffeine_mg: i32,
        base_size_ml: i32,
    ) -> Result<entity::drink::Model, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackingError::InvalidDrink("name must not be blank".to_string()).into());
        }
        if caffeine_mg <= 0 {
            return Err(TrackingError::InvalidDrink(
                "caffeine amount must be positive".to_string(),
            )
            .into());
        }
        if base_size_ml <= 0 {
            return Err(TrackingError::InvalidDrink(
                "base serving size must be positive".to_string(),
            )
            .into());
        }

        let drink_repository = DrinkRepository::new(self.db);

        Ok(drink_repository
            .create(name, caffeine_mg, base_size_ml, Some(user_id.to_string()))
            .await?)
    }

    pub async fn get_drink(&self, drink_id: i32) -> Result<entity::drink::Model, Error> {
        let drink_repository = DrinkRepository::new(self.db);

        Ok(drink_repository
            .get(drink_id)
            .await?
            .ok_or(TrackingError::DrinkNotFound(drink_id))?)
    }

    /// Mark a drink as a favorite of the user
    ///
    /// Favoriting a drink that is already a favorite is a no-op.
    pub async fn add_favorite(&self, user_id: &str, drink_id: i32) -> Result<(), Error> {
        let drink_repository = DrinkRepository::new(self.db);
        let favorite_repository = FavoriteRepository::new(self.db);

        if drink_repository.get(drink_id).await?.is_none() {
            return Err(TrackingError::DrinkNotFound(drink_id).into());
        }

        if favorite_repository.get(user_id, drink_id).await?.is_some() {
            return Ok(());
        }

        favorite_repository.add(user_id, drink_id).await?;

        Ok(())
    }

    /// The user's favorite drinks, most recently favorited first
    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<entity::drink::Model>, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let favorites = favorite_repository.list(user_id).await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, drink)| drink)
            .collect())
    }

    /// Remove a drink from the user's favorites
    ///
    /// Returns whether a favorite was removed.
    pub async fn remove_favorite(&self, user_id: &str, drink_id: i32) -> Result<bool, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);

        let result = favorite_repository.remove(user_id, drink_id).await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {

    mod search {
        use jolt_test_utils::prelude::*;

        use crate::server::service::drink::DrinkService;

        /// Expect an empty result for terms shorter than two characters,
        /// including after trimming whitespace
        #[tokio::test]
        async fn short_terms_return_nothing() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.tracking().insert_drink("Latte", 75).await?;

            let drink_service = DrinkService::new(&test.state.db);

            for term in ["", "l", "  l  ", "   "] {
                let result = drink_service.search(TEST_USER_ID, term).await?;
                assert!(result.is_empty());
            }

            Ok(())
        }

        /// Expect the user's own drinks before global drinks, alphabetical
        /// within each group
        #[tokio::test]
        async fn own_drinks_come_first() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.tracking().insert_drink("Cold Brew", 200).await?;
            test.tracking().insert_drink("Nitro Cold Brew", 280).await?;
            test.tracking()
                .insert_user_drink(TEST_USER_ID, "Home Cold Brew", 150)
                .await?;

            let drink_service = DrinkService::new(&test.state.db);
            let result = drink_service.search(TEST_USER_ID, "cold brew").await?;

            let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(names, vec!["Home Cold Brew", "Cold Brew", "Nitro Cold Brew"]);

            Ok(())
        }

        /// Expect other users' custom drinks not to be promoted above
        /// global drinks
        #[tokio::test]
        async fn other_users_drinks_are_not_promoted() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            test.user().insert_guest(TEST_GUEST_ID).await?;
            test.tracking().insert_drink("Black Tea", 47).await?;
            test.tracking()
                .insert_user_drink(TEST_GUEST_ID, "Aged Black Tea", 40)
                .await?;

            let drink_service = DrinkService::new(&test.state.db);
            let result = drink_service.search(TEST_USER_ID, "black tea").await?;

            let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
            assert_eq!(names, vec!["Aged Black Tea", "Black Tea"]);

            Ok(())
        }

        /// Expect an owned drink to appear even when enough global matches
        /// exist to fill the result cap ahead of it alphabetically
        #[tokio::test]
        async fn own_drink_is_never_capped_out() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            for i in 0..25 {
                test.tracking()
                    .insert_drink(&format!("Aa Cola {:02}", i), 34)
                    .await?;
            }
            test.tracking()
                .insert_user_drink(TEST_USER_ID, "Zz Cola", 34)
                .await?;

            let drink_service = DrinkService::new(&test.state.db);
            let result = drink_service.search(TEST_USER_ID, "cola").await?;

            assert_eq!(result.len(), 20);
            assert_eq!(result[0].name, "Zz Cola");
            assert_eq!(result[0].created_by_user_id.as_deref(), Some(TEST_USER_ID));

            Ok(())
        }
    }

    mod favorites {
        use jolt_test_utils::prelude::*;

        use crate::server::{
            error::{tracking::TrackingError, Error},
            service::drink::DrinkService,
        };

        /// Expect a favorited drink to appear in the favorites listing
        #[tokio::test]
        async fn adds_and_lists_favorite() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Latte", 75).await?;

            let drink_service = DrinkService::new(&test.state.db);
            drink_service.add_favorite(TEST_USER_ID, drink.id).await?;
            let favorites = drink_service.get_favorites(TEST_USER_ID).await?;

            assert_eq!(favorites.len(), 1);
            assert_eq!(favorites[0].name, "Latte");

            Ok(())
        }

        /// Expect favoriting the same drink twice to be a no-op
        #[tokio::test]
        async fn duplicate_favorite_is_a_no_op() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Latte", 75).await?;

            let drink_service = DrinkService::new(&test.state.db);
            drink_service.add_favorite(TEST_USER_ID, drink.id).await?;
            drink_service.add_favorite(TEST_USER_ID, drink.id).await?;

            let favorites = drink_service.get_favorites(TEST_USER_ID).await?;
            assert_eq!(favorites.len(), 1);

            Ok(())
        }

        /// Expect Error when favoriting a drink that does not exist
        #[tokio::test]
        async fn rejects_unknown_drink() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let drink_service = DrinkService::new(&test.state.db);
            let result = drink_service.add_favorite(TEST_USER_ID, 9000).await;

            assert!(matches!(
                result,
                Err(Error::TrackingError(TrackingError::DrinkNotFound(9000)))
            ));

            Ok(())
        }

        /// Expect removal to report whether a favorite actually existed
        #[tokio::test]
        async fn removal_reports_existence() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;
            let drink = test.tracking().insert_drink("Latte", 75).await?;
            test.tracking().insert_favorite(TEST_USER_ID, drink.id).await?;

            let drink_service = DrinkService::new(&test.state.db);

            let removed = drink_service.remove_favorite(TEST_USER_ID, drink.id).await?;
            assert!(removed);

            let removed_again = drink_service.remove_favorite(TEST_USER_ID, drink.id).await?;
            assert!(!removed_again);

            Ok(())
        }
    }

    mod create_drink {
        use jolt_test_utils::prelude::*;

        use crate::server::{
            error::{tracking::TrackingError, Error},
            service::drink::DrinkService,
        };

        /// Expect success when creating a valid custom drink
        #[tokio::test]
        async fn creates_custom_drink() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let drink_service = DrinkService::new(&test.state.db);
            let drink = drink_service
                .create_drink(TEST_USER_ID, "My Matcha", 70, 350)
                .await?;

            assert_eq!(drink.created_by_user_id.as_deref(), Some(TEST_USER_ID));

            Ok(())
        }

        /// Expect Error for a blank name
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let drink_service = DrinkService::new(&test.state.db);
            let result = drink_service.create_drink(TEST_USER_ID, "   ", 70, 350).await;

            assert!(matches!(
                result,
                Err(Error::TrackingError(TrackingError::InvalidDrink(_)))
            ));

            Ok(())
        }

        /// Expect Error for a zero or negative caffeine amount
        #[tokio::test]
        async fn rejects_non_positive_caffeine() -> Result<(), TestError> {
            let test = test_setup_with_tracking_tables!()?;
            test.user().insert_user(TEST_USER_ID).await?;

            let drink_service = DrinkService::new(&test.state.db);

            for invalid in [0, -10] {
                let result = drink_service
                    .create_drink(TEST_USER_ID, "Impossible Drink", invalid, 350)
                    .await;

                assert!(matches!(
                    result,
                    Err(Error::TrackingError(TrackingError::InvalidDrink(_)))
                ));
            }

            Ok(())
        }
    }
}
