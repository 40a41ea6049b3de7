use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorsDto,
        restaurant_pizza::{CreateRestaurantPizzaDto, RestaurantPizzaDto},
    },
    server::{
        error::AppError, service::restaurant_pizza::RestaurantPizzaService, state::AppState,
    },
};

pub static RESTAURANT_PIZZA_TAG: &str = "restaurant_pizza";

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = RESTAURANT_PIZZA_TAG,
    request_body = CreateRestaurantPizzaDto,
    responses(
        (status = 201, description = "Successfully created restaurant pizza", body = RestaurantPizzaDto),
        (status = 400, description = "Invalid body, unknown pizza or restaurant, or failed write", body = ErrorsDto)
    ),
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Malformed bodies share the validation contract instead of axum's plain-text rejection
    let Json(payload) = payload.map_err(|e| AppError::validation(e.body_text()))?;

    let restaurant_pizza = RestaurantPizzaService::new(&state.db)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(restaurant_pizza.into_dto())))
}
