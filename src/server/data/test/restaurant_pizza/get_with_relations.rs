use super::*;

/// Tests loading an association with both sides expanded.
///
/// Expected: Ok(Some) with pizza and restaurant matching the foreign keys
#[tokio::test]
async fn returns_association_with_pizza_and_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::create_restaurant_pizza_with_dependencies(db).await?;

    let result = RestaurantPizzaRepository::new(db)
        .get_with_relations(restaurant_pizza.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant_pizza.id, restaurant_pizza.id);
    assert_eq!(result.pizza.id, pizza.id);
    assert_eq!(result.pizza.name, pizza.name);
    assert_eq!(result.restaurant.id, restaurant.id);
    assert_eq!(result.restaurant.address, restaurant.address);

    Ok(())
}

/// Tests loading an association that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantPizzaRepository::new(db)
        .get_with_relations(99999)
        .await?;

    assert!(result.is_none());

    Ok(())
}
