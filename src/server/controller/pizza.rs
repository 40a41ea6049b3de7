use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, pizza::PizzaDto},
    server::{error::AppError, service::pizza::PizzaService, state::AppState},
};

pub static PIZZA_TAG: &str = "pizza";

#[utoipa::path(
    get,
    path = "/pizzas",
    tag = PIZZA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pizzas", body = Vec<PizzaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = PizzaService::new(&state.db).get_all().await?;

    let dto: Vec<PizzaDto> = pizzas.into_iter().map(|pizza| pizza.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
