use super::*;

/// Tests deleting associations only touches the given restaurant.
///
/// Expected: Ok with the target restaurant's rows removed and others kept
#[tokio::test]
async fn deletes_only_associations_of_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other_restaurant = factory::create_restaurant(db).await?;
    let pizza = factory::create_pizza(db).await?;

    factory::create_restaurant_pizza(db, restaurant.id, pizza.id).await?;
    factory::create_restaurant_pizza(db, restaurant.id, pizza.id).await?;
    let kept = factory::create_restaurant_pizza(db, other_restaurant.id, pizza.id).await?;

    let repo = RestaurantPizzaRepository::new(db);
    let deleted = repo.delete_by_restaurant_id(restaurant.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::RestaurantPizza::find().count(db).await?, 1);
    let db_kept = entity::prelude::RestaurantPizza::find_by_id(kept.id)
        .one(db)
        .await?;
    assert!(db_kept.is_some());

    Ok(())
}
