//! Restaurant domain models.
//!
//! `Restaurant` is the shallow form used for listings and as the nested side of a newly created
//! association. `RestaurantWithPizzas` carries the associations for the detail endpoint.

use crate::{
    model::restaurant::{RestaurantDetailDto, RestaurantDto},
    server::model::restaurant_pizza::RestaurantPizzaWithPizza,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    /// Converts the domain model to its shallow DTO, without associations.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Restaurant together with every association it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithPizzas {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

impl RestaurantWithPizzas {
    /// Converts to the detail DTO.
    ///
    /// Each association is expanded with its pizza only; the restaurant is not repeated inside
    /// its own associations.
    pub fn into_dto(self) -> RestaurantDetailDto {
        RestaurantDetailDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            address: self.restaurant.address,
            restaurant_pizzas: self
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaWithPizza::into_dto)
                .collect(),
        }
    }
}
