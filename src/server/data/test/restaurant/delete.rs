use super::*;

/// Tests deleting a restaurant by ID.
///
/// Expected: Ok(1) with restaurant removed
#[tokio::test]
async fn deletes_restaurant_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let deleted = RestaurantRepository::new(db).delete(restaurant.id).await?;

    assert_eq!(deleted, 1);
    let db_restaurant = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(db_restaurant.is_none());

    Ok(())
}

/// Tests deleting a nonexistent restaurant removes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nothing_for_nonexistent_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = RestaurantRepository::new(db).delete(99999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests deleting a restaurant cascades to its associations through the foreign key.
///
/// Expected: Ok with associations removed and the pizza kept
#[tokio::test]
async fn deletes_restaurant_cascades_to_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, pizza, restaurant_pizza) =
        factory::create_restaurant_pizza_with_dependencies(db).await?;

    RestaurantRepository::new(db).delete(restaurant.id).await?;

    let db_restaurant_pizza = entity::prelude::RestaurantPizza::find_by_id(restaurant_pizza.id)
        .one(db)
        .await?;
    assert!(db_restaurant_pizza.is_none());

    let db_pizza = entity::prelude::Pizza::find_by_id(pizza.id).one(db).await?;
    assert!(db_pizza.is_some());

    Ok(())
}

/// Tests deleting associations and restaurant within one transaction.
///
/// Verifies that a rolled back transaction leaves both the restaurant and its
/// associations in place.
///
/// Expected: Ok with nothing removed
#[tokio::test]
async fn rolled_back_delete_keeps_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, _pizza, _restaurant_pizza) =
        factory::create_restaurant_pizza_with_dependencies(db).await?;

    let txn = db.begin().await?;
    RestaurantPizzaRepository::new(&txn)
        .delete_by_restaurant_id(restaurant.id)
        .await?;
    RestaurantRepository::new(&txn).delete(restaurant.id).await?;
    txn.rollback().await?;

    assert_eq!(entity::prelude::Restaurant::find().count(db).await?, 1);
    assert_eq!(entity::prelude::RestaurantPizza::find().count(db).await?, 1);

    Ok(())
}
