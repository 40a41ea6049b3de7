use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pizza::PizzaDto, restaurant::RestaurantDto};

/// Association as nested inside a restaurant detail; the restaurant back-reference is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaWithPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDto,
}

/// Newly created association with both sides expanded in their shallow form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantPizzaDto {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDto,
    pub restaurant: RestaurantDto,
}

/// Request body for creating an association.
///
/// Fields are optional so that a missing value is reported through the `errors` list rather
/// than rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaDto {
    pub price: Option<i32>,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}
