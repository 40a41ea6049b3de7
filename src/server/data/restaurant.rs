use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    data::restaurant_pizza::RestaurantPizzaRepository,
    model::restaurant::{Restaurant, RestaurantWithPizzas},
};

pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a restaurant and returns it
    pub async fn create(&self, name: String, address: String) -> Result<Restaurant, DbErr> {
        let restaurant = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(name),
            address: ActiveValue::Set(address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Restaurant::from_entity(restaurant))
    }

    /// Gets all restaurants ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Restaurant>, DbErr> {
        let restaurants = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(restaurants
            .into_iter()
            .map(Restaurant::from_entity)
            .collect())
    }

    /// Gets a restaurant by ID without its associations
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Restaurant>, DbErr> {
        let restaurant = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(restaurant.map(Restaurant::from_entity))
    }

    /// Gets a restaurant by ID along with every association and the pizza each one refers to
    pub async fn get_with_pizzas(&self, id: i32) -> Result<Option<RestaurantWithPizzas>, DbErr> {
        let Some(restaurant) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let restaurant_pizzas = RestaurantPizzaRepository::new(self.db)
            .get_by_restaurant_id(id)
            .await?;

        Ok(Some(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas,
        }))
    }

    /// Deletes a restaurant row, returning the number of rows removed.
    ///
    /// Associations are left to the caller (or the foreign key cascade); run this inside the
    /// same transaction as `RestaurantPizzaRepository::delete_by_restaurant_id`.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all restaurants
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Restaurant::find().count(self.db).await
    }
}
