use entity::restaurant_pizza;

pub const DEFAULT_PRICE: i32 = 5;

/// Creates an association entity model linking the default restaurant and pizza fixtures.
pub fn entity() -> restaurant_pizza::Model {
    restaurant_pizza::Model {
        id: 1,
        price: DEFAULT_PRICE,
        restaurant_id: super::restaurant::entity().id,
        pizza_id: super::pizza::entity().id,
    }
}
