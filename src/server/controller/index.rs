use axum::response::Html;

pub static INDEX_TAG: &str = "index";

#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Static HTML banner", body = String, content_type = "text/html")
    ),
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
