use sea_orm::DatabaseConnection;

use crate::server::{data::pizza::PizzaRepository, error::AppError, model::pizza::Pizza};

pub struct PizzaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PizzaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all pizzas
    pub async fn get_all(&self) -> Result<Vec<Pizza>, AppError> {
        let repo = PizzaRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
