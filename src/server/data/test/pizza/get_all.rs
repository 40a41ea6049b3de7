use super::*;

/// Tests listing pizzas from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_pizzas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pizzas = PizzaRepository::new(db).get_all().await?;

    assert!(pizzas.is_empty());

    Ok(())
}

/// Tests listing pizzas returns every row ordered by ID.
///
/// Expected: Ok with all pizzas
#[tokio::test]
async fn returns_all_pizzas_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_pizza(db).await?;
    let second = factory::create_pizza(db).await?;

    let pizzas = PizzaRepository::new(db).get_all().await?;

    assert_eq!(pizzas.len(), 2);
    assert_eq!(pizzas[0].id, first.id);
    assert_eq!(pizzas[0].ingredients, first.ingredients);
    assert_eq!(pizzas[1].id, second.id);

    Ok(())
}
