//! Restaurant pizza domain models and creation parameters.

use sea_orm::DbErr;

use crate::{
    model::restaurant_pizza::{
        CreateRestaurantPizzaDto, RestaurantPizzaDto, RestaurantPizzaWithPizzaDto,
    },
    server::model::{pizza::Pizza, restaurant::Restaurant},
};

/// Lowest price a restaurant may charge for a pizza.
pub const MIN_PRICE: i32 = 1;

/// Highest price a restaurant may charge for a pizza.
pub const MAX_PRICE: i32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

impl RestaurantPizza {
    pub fn from_entity(entity: entity::restaurant_pizza::Model) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            pizza_id: entity.pizza_id,
            restaurant_id: entity.restaurant_id,
        }
    }
}

/// Association expanded with its pizza, as nested in a restaurant detail.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithPizza {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

impl RestaurantPizzaWithPizza {
    /// Converts entity models loaded with `find_also_related` to a domain model.
    ///
    /// # Returns
    /// - `Ok(RestaurantPizzaWithPizza)` - Association with its pizza
    /// - `Err(DbErr::RecordNotFound)` - The referenced pizza row is missing
    pub fn from_entity(
        entity: entity::restaurant_pizza::Model,
        pizza: Option<entity::pizza::Model>,
    ) -> Result<Self, DbErr> {
        let pizza = pizza.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Pizza {} referenced by restaurant pizza {} not found",
                entity.pizza_id, entity.id
            ))
        })?;

        Ok(Self {
            restaurant_pizza: RestaurantPizza::from_entity(entity),
            pizza: Pizza::from_entity(pizza),
        })
    }

    pub fn into_dto(self) -> RestaurantPizzaWithPizzaDto {
        RestaurantPizzaWithPizzaDto {
            id: self.restaurant_pizza.id,
            price: self.restaurant_pizza.price,
            pizza_id: self.restaurant_pizza.pizza_id,
            restaurant_id: self.restaurant_pizza.restaurant_id,
            pizza: self.pizza.into_dto(),
        }
    }
}

/// Association expanded with both its pizza and its restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaWithRelations {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

impl RestaurantPizzaWithRelations {
    /// Converts to the creation response; both sides use their shallow form.
    pub fn into_dto(self) -> RestaurantPizzaDto {
        RestaurantPizzaDto {
            id: self.restaurant_pizza.id,
            price: self.restaurant_pizza.price,
            pizza_id: self.restaurant_pizza.pizza_id,
            restaurant_id: self.restaurant_pizza.restaurant_id,
            pizza: self.pizza.into_dto(),
            restaurant: self.restaurant.into_dto(),
        }
    }
}

/// Validated parameters for creating an association.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRestaurantPizzaParams {
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

impl CreateRestaurantPizzaParams {
    /// Checks presence of every field and the price range.
    ///
    /// All problems are collected rather than stopping at the first one.
    ///
    /// # Returns
    /// - `Ok(CreateRestaurantPizzaParams)` - Every field present and price within range
    /// - `Err(Vec<String>)` - One message per problem found, never empty
    pub fn from_dto(dto: CreateRestaurantPizzaDto) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();

        match dto.price {
            None => errors.push("price is required".to_string()),
            Some(price) if !(MIN_PRICE..=MAX_PRICE).contains(&price) => errors.push(format!(
                "Price must be between {} and {}",
                MIN_PRICE, MAX_PRICE
            )),
            Some(_) => {}
        }
        if dto.pizza_id.is_none() {
            errors.push("pizza_id is required".to_string());
        }
        if dto.restaurant_id.is_none() {
            errors.push("restaurant_id is required".to_string());
        }

        match (dto.price, dto.pizza_id, dto.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) if errors.is_empty() => Ok(Self {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(errors),
        }
    }
}
