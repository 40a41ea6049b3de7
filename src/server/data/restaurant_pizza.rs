use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    restaurant::Restaurant,
    restaurant_pizza::{
        CreateRestaurantPizzaParams, RestaurantPizza, RestaurantPizzaWithPizza,
        RestaurantPizzaWithRelations,
    },
};

pub struct RestaurantPizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantPizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an association.
    ///
    /// Referential integrity and the price range are enforced by the schema as well, so invalid
    /// params surface as a `DbErr` here even when the caller skipped its own checks.
    pub async fn create(
        &self,
        params: CreateRestaurantPizzaParams,
    ) -> Result<RestaurantPizza, DbErr> {
        let restaurant_pizza = entity::restaurant_pizza::ActiveModel {
            price: ActiveValue::Set(params.price),
            pizza_id: ActiveValue::Set(params.pizza_id),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RestaurantPizza::from_entity(restaurant_pizza))
    }

    /// Gets an association by ID with both its pizza and its restaurant
    pub async fn get_with_relations(
        &self,
        id: i32,
    ) -> Result<Option<RestaurantPizzaWithRelations>, DbErr> {
        let Some((restaurant_pizza, pizza)) = entity::prelude::RestaurantPizza::find_by_id(id)
            .find_also_related(entity::prelude::Pizza)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let restaurant = entity::prelude::Restaurant::find_by_id(restaurant_pizza.restaurant_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Restaurant {} referenced by restaurant pizza {} not found",
                    restaurant_pizza.restaurant_id, restaurant_pizza.id
                ))
            })?;

        let with_pizza = RestaurantPizzaWithPizza::from_entity(restaurant_pizza, pizza)?;

        Ok(Some(RestaurantPizzaWithRelations {
            restaurant_pizza: with_pizza.restaurant_pizza,
            pizza: with_pizza.pizza,
            restaurant: Restaurant::from_entity(restaurant),
        }))
    }

    /// Gets every association of a restaurant, ordered by ID, each with its pizza
    pub async fn get_by_restaurant_id(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<RestaurantPizzaWithPizza>, DbErr> {
        entity::prelude::RestaurantPizza::find()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .find_also_related(entity::prelude::Pizza)
            .order_by_asc(entity::restaurant_pizza::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(restaurant_pizza, pizza)| {
                RestaurantPizzaWithPizza::from_entity(restaurant_pizza, pizza)
            })
            .collect()
    }

    /// Deletes every association of a restaurant, returning the number of rows removed
    pub async fn delete_by_restaurant_id(&self, restaurant_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RestaurantPizza::delete_many()
            .filter(entity::restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
