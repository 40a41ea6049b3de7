//! Restaurant pizza factory for creating test associations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default price used for associations created by the factory.
pub const DEFAULT_PRICE: i32 = 10;

/// Factory for creating associations between an existing restaurant and pizza.
pub struct RestaurantPizzaFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    pizza_id: i32,
    price: i32,
}

impl<'a> RestaurantPizzaFactory<'a> {
    /// Creates a new RestaurantPizzaFactory with a price of `DEFAULT_PRICE`.
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32, pizza_id: i32) -> Self {
        Self {
            db,
            restaurant_id,
            pizza_id,
            price: DEFAULT_PRICE,
        }
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the association into the database.
    ///
    /// The price is inserted as-is, so tests can also use this factory to exercise
    /// database-level constraints.
    pub async fn build(self) -> Result<entity::restaurant_pizza::Model, DbErr> {
        entity::restaurant_pizza::ActiveModel {
            id: ActiveValue::NotSet,
            price: ActiveValue::Set(self.price),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            pizza_id: ActiveValue::Set(self.pizza_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an association with the default price.
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<entity::restaurant_pizza::Model, DbErr> {
    RestaurantPizzaFactory::new(db, restaurant_id, pizza_id)
        .build()
        .await
}
