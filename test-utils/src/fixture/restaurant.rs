use entity::restaurant;

pub const DEFAULT_NAME: &str = "Dragon Pizza";

pub const DEFAULT_ADDRESS: &str = "1 Dragon Way";

/// Creates a restaurant entity model with id `1` and the default name and address.
pub fn entity() -> restaurant::Model {
    restaurant::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        address: DEFAULT_ADDRESS.to_string(),
    }
}
