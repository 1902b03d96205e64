use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/keep/",
    responses(
        (status = 200, description = "Service is alive", body = String)
    )
)]
pub async fn keep_handler() -> impl IntoResponse {
    (StatusCode::OK, Json("OK"))
}
