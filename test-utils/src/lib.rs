//! Pizza Restaurants Test Utils
//!
//! Shared testing utilities for the pizza restaurants API. Provides a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert rows with sensible defaults, and
//! fixtures that build entity models without touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_restaurants() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_restaurant_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let restaurant = factory::create_restaurant(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
