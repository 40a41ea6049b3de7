use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::restaurant_pizza::CreateRestaurantPizzaDto,
    server::{
        data::{
            pizza::PizzaRepository, restaurant::RestaurantRepository,
            restaurant_pizza::RestaurantPizzaRepository,
        },
        error::AppError,
        model::restaurant_pizza::{CreateRestaurantPizzaParams, RestaurantPizzaWithRelations},
    },
};

pub struct RestaurantPizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantPizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an association between a restaurant and a pizza.
    ///
    /// Field presence, the price range and the existence of every referenced row are all
    /// checked inside the transaction that performs the insert, and every problem found is
    /// reported together. Every failure on this path, including database errors, is reported
    /// as `AppError::Validation` and leaves no row behind.
    ///
    /// # Returns
    /// - `Ok(RestaurantPizzaWithRelations)` - Created association with its pizza and restaurant
    /// - `Err(AppError::Validation)` - Invalid input, unknown references or a failed write
    pub async fn create(
        &self,
        dto: CreateRestaurantPizzaDto,
    ) -> Result<RestaurantPizzaWithRelations, AppError> {
        let created = self.create_in_transaction(dto).await;

        match &created {
            Ok(restaurant_pizza) => tracing::debug!(
                "Created restaurant pizza {} for restaurant {} and pizza {}",
                restaurant_pizza.restaurant_pizza.id,
                restaurant_pizza.restaurant.id,
                restaurant_pizza.pizza.id
            ),
            Err(AppError::Validation(errors)) => {
                tracing::warn!("Rejected restaurant pizza: {}", errors.join(", "))
            }
            Err(_) => {}
        }

        created
    }

    async fn create_in_transaction(
        &self,
        dto: CreateRestaurantPizzaDto,
    ) -> Result<RestaurantPizzaWithRelations, AppError> {
        let (pizza_id, restaurant_id) = (dto.pizza_id, dto.restaurant_id);
        let (params, mut errors) = match CreateRestaurantPizzaParams::from_dto(dto) {
            Ok(params) => (Some(params), Vec::new()),
            Err(errors) => (None, errors),
        };

        let txn = self.db.begin().await.map_err(persistence_error)?;

        // References are checked even when other fields already failed
        if let Some(pizza_id) = pizza_id {
            if PizzaRepository::new(&txn)
                .get_by_id(pizza_id)
                .await
                .map_err(persistence_error)?
                .is_none()
            {
                errors.push("Pizza not found".to_string());
            }
        }
        if let Some(restaurant_id) = restaurant_id {
            if RestaurantRepository::new(&txn)
                .get_by_id(restaurant_id)
                .await
                .map_err(persistence_error)?
                .is_none()
            {
                errors.push("Restaurant not found".to_string());
            }
        }

        let params = match params {
            Some(params) if errors.is_empty() => params,
            _ => return Err(AppError::Validation(errors)),
        };

        let repo = RestaurantPizzaRepository::new(&txn);
        let restaurant_pizza = repo.create(params).await.map_err(persistence_error)?;
        let created = repo
            .get_with_relations(restaurant_pizza.id)
            .await
            .map_err(persistence_error)?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Restaurant pizza {} not found after creation",
                    restaurant_pizza.id
                ))
            })?;

        txn.commit().await.map_err(persistence_error)?;

        Ok(created)
    }
}

fn persistence_error(err: DbErr) -> AppError {
    AppError::validation(err.to_string())
}
