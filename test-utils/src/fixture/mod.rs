//! Test fixtures providing entity models without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. Use them for unit tests of domain
//! conversions and response projections.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let restaurant = fixture::restaurant::entity();
//! let pizza = fixture::pizza::entity();
//! let association = fixture::restaurant_pizza::entity();
//! ```

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
