use crate::server::data::{
    restaurant::RestaurantRepository, restaurant_pizza::RestaurantPizzaRepository,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_with_pizzas;
