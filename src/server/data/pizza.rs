use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::pizza::Pizza;

pub struct PizzaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PizzaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pizza and returns it
    pub async fn create(&self, name: String, ingredients: String) -> Result<Pizza, DbErr> {
        let pizza = entity::pizza::ActiveModel {
            name: ActiveValue::Set(name),
            ingredients: ActiveValue::Set(ingredients),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pizza::from_entity(pizza))
    }

    /// Gets all pizzas ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Pizza>, DbErr> {
        let pizzas = entity::prelude::Pizza::find()
            .order_by_asc(entity::pizza::Column::Id)
            .all(self.db)
            .await?;

        Ok(pizzas.into_iter().map(Pizza::from_entity).collect())
    }

    /// Gets a pizza by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pizza>, DbErr> {
        let pizza = entity::prelude::Pizza::find_by_id(id).one(self.db).await?;

        Ok(pizza.map(Pizza::from_entity))
    }

    /// Counts all pizzas
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Pizza::find().count(self.db).await
    }
}
