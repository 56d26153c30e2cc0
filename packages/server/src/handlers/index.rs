use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    operation_id = "index",
    summary = "Landing page",
    responses((status = 200, description = "HTML landing page")),
)]
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
