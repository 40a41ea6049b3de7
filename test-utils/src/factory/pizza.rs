//! Pizza factory for creating test pizza entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pizzas with customizable fields.
pub struct PizzaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    ingredients: String,
}

impl<'a> PizzaFactory<'a> {
    /// Creates a new PizzaFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pizza {id}"`
    /// - ingredients: `"Dough, Tomato Sauce, Cheese"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pizza {}", id),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Builds and inserts the pizza entity into the database.
    pub async fn build(self) -> Result<entity::pizza::Model, DbErr> {
        entity::pizza::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            ingredients: ActiveValue::Set(self.ingredients),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pizza with default values.
pub async fn create_pizza(db: &DatabaseConnection) -> Result<entity::pizza::Model, DbErr> {
    PizzaFactory::new(db).build().await
}
