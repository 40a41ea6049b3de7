use super::*;

/// Tests creating an association between an existing restaurant and pizza.
///
/// Expected: Ok with association persisted
#[tokio::test]
async fn creates_association_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;

    let created = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParams {
            price: 10,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        })
        .await?;

    assert_eq!(created.price, 10);
    assert_eq!(created.pizza_id, pizza.id);
    assert_eq!(created.restaurant_id, restaurant.id);

    let db_restaurant_pizza = entity::prelude::RestaurantPizza::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_restaurant_pizza.is_some());

    Ok(())
}

/// Tests creating an association that references a missing pizza.
///
/// Verifies that the foreign key constraint rejects the row.
///
/// Expected: Err with no row created
#[tokio::test]
async fn fails_for_nonexistent_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let result = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParams {
            price: 10,
            pizza_id: 99999,
            restaurant_id: restaurant.id,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::RestaurantPizza::find().count(db).await?, 0);

    Ok(())
}

/// Tests the same pizza may be offered by a restaurant more than once.
///
/// Expected: Ok with two distinct associations
#[tokio::test]
async fn allows_duplicate_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, existing) =
        factory::create_restaurant_pizza_with_dependencies(db).await?;

    let created = RestaurantPizzaRepository::new(db)
        .create(CreateRestaurantPizzaParams {
            price: 20,
            pizza_id: pizza.id,
            restaurant_id: restaurant.id,
        })
        .await?;

    assert_ne!(created.id, existing.id);

    Ok(())
}
