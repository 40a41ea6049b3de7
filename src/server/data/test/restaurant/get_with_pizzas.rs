use super::*;
use test_utils::factory::{pizza::PizzaFactory, restaurant_pizza::RestaurantPizzaFactory};

/// Tests fetching a restaurant that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RestaurantRepository::new(db).get_with_pizzas(99999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests fetching a restaurant without associations.
///
/// Expected: Ok(Some) with empty association list
#[tokio::test]
async fn returns_restaurant_without_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let result = RestaurantRepository::new(db)
        .get_with_pizzas(restaurant.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant.id, restaurant.id);
    assert!(result.restaurant_pizzas.is_empty());

    Ok(())
}

/// Tests fetching a restaurant loads each association with its pizza.
///
/// Verifies that only this restaurant's associations are returned and that each
/// one carries the pizza row it references.
///
/// Expected: Ok(Some) with associations ordered by ID
#[tokio::test]
async fn returns_associations_with_their_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other_restaurant = factory::create_restaurant(db).await?;
    let cheese = PizzaFactory::new(db).name("Cheese").build().await?;
    let pepperoni = PizzaFactory::new(db).name("Pepperoni").build().await?;

    let first = RestaurantPizzaFactory::new(db, restaurant.id, cheese.id)
        .price(5)
        .build()
        .await?;
    let second = RestaurantPizzaFactory::new(db, restaurant.id, pepperoni.id)
        .price(12)
        .build()
        .await?;
    factory::create_restaurant_pizza(db, other_restaurant.id, cheese.id).await?;

    let result = RestaurantRepository::new(db)
        .get_with_pizzas(restaurant.id)
        .await?
        .unwrap();

    assert_eq!(result.restaurant_pizzas.len(), 2);

    assert_eq!(result.restaurant_pizzas[0].restaurant_pizza.id, first.id);
    assert_eq!(result.restaurant_pizzas[0].restaurant_pizza.price, 5);
    assert_eq!(result.restaurant_pizzas[0].pizza.id, cheese.id);
    assert_eq!(result.restaurant_pizzas[0].pizza.name, "Cheese");

    assert_eq!(result.restaurant_pizzas[1].restaurant_pizza.id, second.id);
    assert_eq!(result.restaurant_pizzas[1].pizza.name, "Pepperoni");

    Ok(())
}
