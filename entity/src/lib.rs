//! SeaORM entity models for the restaurants, pizzas and restaurant_pizzas tables.

pub mod prelude;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
