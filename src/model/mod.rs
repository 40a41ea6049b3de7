//! Wire-level request and response types.
//!
//! Each response type is a fixed projection of the stored entities for one endpoint. Nested
//! relations only appear where an endpoint asks for them, and never in both directions, so a
//! body can not recurse from a restaurant into its associations and back.

pub mod api;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
