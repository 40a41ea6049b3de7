use entity::pizza;

pub const DEFAULT_NAME: &str = "Cheese";

pub const DEFAULT_INGREDIENTS: &str = "Dough, Tomato Sauce, Cheese";

/// Creates a pizza entity model with id `1` and the default name and ingredients.
pub fn entity() -> pizza::Model {
    pizza::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        ingredients: DEFAULT_INGREDIENTS.to_string(),
    }
}
