//! Database repository layer.
//!
//! Repositories handle the queries, inserts and deletes for each table. They are generic over
//! `ConnectionTrait` so the same repository works against the pool for reads and against a
//! `DatabaseTransaction` for writes that must be atomic. Entity models are converted to domain
//! models before leaving this layer.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
