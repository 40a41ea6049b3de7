use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{restaurant::RestaurantRepository, restaurant_pizza::RestaurantPizzaRepository},
    error::AppError,
    model::restaurant::{Restaurant, RestaurantWithPizzas},
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all restaurants without their associations
    pub async fn get_all(&self) -> Result<Vec<Restaurant>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a restaurant with its associations and their pizzas
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantWithPizzas>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        Ok(repo.get_with_pizzas(id).await?)
    }

    /// Deletes a restaurant and all of its associations in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Restaurant and associations deleted
    /// - `Ok(false)` - No restaurant with this ID, nothing changed
    /// - `Err(AppError::DbErr)` - Storage failure; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let restaurant_repo = RestaurantRepository::new(&txn);
        if restaurant_repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let removed_associations = RestaurantPizzaRepository::new(&txn)
            .delete_by_restaurant_id(id)
            .await?;
        restaurant_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted restaurant {} with {} associations",
            id,
            removed_associations
        );

        Ok(true)
    }
}
