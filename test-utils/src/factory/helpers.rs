//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a restaurant, a pizza and an association between them.
///
/// All entities are created with default values. Use the individual factories if specific
/// fields need customizing.
///
/// # Returns
/// - `Ok((restaurant, pizza, restaurant_pizza))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_restaurant_pizza_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant::Model,
        entity::pizza::Model,
        entity::restaurant_pizza::Model,
    ),
    DbErr,
> {
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let pizza = crate::factory::pizza::create_pizza(db).await?;
    let restaurant_pizza =
        crate::factory::restaurant_pizza::create_restaurant_pizza(db, restaurant.id, pizza.id)
            .await?;

    Ok((restaurant, pizza, restaurant_pizza))
}
