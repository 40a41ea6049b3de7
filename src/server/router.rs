use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto},
        pizza::PizzaDto,
        restaurant::{RestaurantDetailDto, RestaurantDto},
        restaurant_pizza::{
            CreateRestaurantPizzaDto, RestaurantPizzaDto, RestaurantPizzaWithPizzaDto,
        },
    },
    server::{
        controller::{index, pizza, restaurant, restaurant_pizza},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        restaurant::get_restaurants,
        restaurant::get_restaurant_by_id,
        restaurant::delete_restaurant,
        pizza::get_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            ErrorDto,
            ErrorsDto,
            PizzaDto,
            RestaurantDto,
            RestaurantDetailDto,
            RestaurantPizzaWithPizzaDto,
            RestaurantPizzaDto,
            CreateRestaurantPizzaDto,
        )
    ),
    tags(
        (name = "index", description = "Landing page"),
        (name = "restaurant", description = "Restaurant listing, detail and deletion"),
        (name = "pizza", description = "Pizza listing"),
        (name = "restaurant_pizza", description = "Restaurant pizza creation"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/restaurants", get(restaurant::get_restaurants))
        .route(
            "/restaurants/{id}",
            get(restaurant::get_restaurant_by_id).delete(restaurant::delete_restaurant),
        )
        .route("/pizzas", get(pizza::get_pizzas))
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizza::create_restaurant_pizza),
        )
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Builds the complete application with state and the HTTP middleware stack applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto {
            error: "Method not allowed".to_string(),
        }),
    )
}
