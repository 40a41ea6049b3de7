use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::restaurant_pizza::RestaurantPizzaWithPizzaDto;

/// Shallow restaurant representation without its pizza associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant with its associations, each expanded with the pizza it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetailDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizzaDto>,
}
