use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{pizza::PizzaRepository, restaurant::RestaurantRepository},
    error::AppError,
};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Inserts demo restaurants and pizzas into an empty database.
pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds restaurants and pizzas in one transaction if both tables are empty.
    ///
    /// # Returns
    /// - `Ok(true)` - Demo rows inserted
    /// - `Ok(false)` - Existing rows found, nothing inserted
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let restaurant_repo = RestaurantRepository::new(&txn);
        let pizza_repo = PizzaRepository::new(&txn);

        if restaurant_repo.count().await? > 0 || pizza_repo.count().await? > 0 {
            return Ok(false);
        }

        for (name, address) in RESTAURANTS {
            restaurant_repo
                .create(name.to_string(), address.to_string())
                .await?;
        }
        for (name, ingredients) in PIZZAS {
            pizza_repo
                .create(name.to_string(), ingredients.to_string())
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }
}
