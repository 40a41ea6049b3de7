//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each entity
//! has a `Factory` builder for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::create_restaurant(&db).await?;
//! let pizza = factory::pizza::PizzaFactory::new(&db)
//!     .name("Cheese")
//!     .ingredients("Dough, Tomato Sauce, Cheese")
//!     .build()
//!     .await?;
//! let association = factory::create_restaurant_pizza(&db, restaurant.id, pizza.id).await?;
//! ```

pub mod helpers;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use helpers::create_restaurant_pizza_with_dependencies;
pub use pizza::create_pizza;
pub use restaurant::create_restaurant;
pub use restaurant_pizza::create_restaurant_pizza;
