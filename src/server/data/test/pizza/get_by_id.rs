use super::*;

#[tokio::test]
async fn returns_pizza_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::create_pizza(db).await?;

    let result = PizzaRepository::new(db).get_by_id(pizza.id).await?.unwrap();

    assert_eq!(result.name, pizza.name);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_nonexistent_pizza() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PizzaRepository::new(db).get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
