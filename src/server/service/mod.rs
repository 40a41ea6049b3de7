//! Business logic between controllers and repositories.
//!
//! Services own transaction boundaries: reads go straight to the pool, while deletes and
//! inserts open a transaction, run every repository call through it and commit only when all
//! of them succeed. Dropping an uncommitted transaction rolls it back.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod seed;
