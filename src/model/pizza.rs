use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shallow pizza representation without its restaurant associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PizzaDto {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}
