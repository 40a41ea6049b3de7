//! HTTP request handlers.
//!
//! Controllers translate requests into service calls and domain models into response DTOs.
//! They hold no business logic of their own.

pub mod index;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
