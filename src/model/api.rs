use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single error message body, used for not-found and internal errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error list body returned when creating an association fails.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorsDto {
    pub errors: Vec<String>,
}
