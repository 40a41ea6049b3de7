//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. The `into_dto` conversions are where each endpoint's
//! projection is decided.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
