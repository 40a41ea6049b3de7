use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{RestaurantDetailDto, RestaurantDto},
    },
    server::{error::AppError, service::restaurant::RestaurantService, state::AppState},
};

pub static RESTAURANT_TAG: &str = "restaurant";

static RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// Extracts the restaurant ID, treating a segment that isn't an integer as an unknown restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = Vec<RestaurantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(&state.db).get_all().await?;

    let dto: Vec<RestaurantDto> = restaurants
        .into_iter()
        .map(|restaurant| restaurant.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant", body = RestaurantDetailDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = restaurant_id(path)?;

    let restaurant = RestaurantService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = RESTAURANT_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Restaurant and its pizza associations deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = restaurant_id(path)?;

    let deleted = RestaurantService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
