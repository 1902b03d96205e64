use crate::domain::participant::CounterField;
use crate::transport::http::handlers::common::record_json;
use crate::transport::http::types::{json_422, ApiResponse, AppState, LineIdQuery};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

#[utoipa::path(
    put,
    path = "/add/{field}",
    params(
        ("field" = String, Path, description = "Counter to increment: healthMeasurement, healthEducation or exercise")
    ),
    request_body = LineIdQuery,
    responses(
        (status = 200, description = "Post-increment participant", body = ApiResponse),
        (status = 400, description = "Unknown counter field", body = ApiResponse),
        (status = 404, description = "No participant with this lineId", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn increment_handler(
    State(state): State<AppState>,
    Path(field): Path<String>,
    request: Result<Json<LineIdQuery>, JsonRejection>,
) -> impl IntoResponse {
    // Reject unknown field names before any datastore call.
    let Ok(field) = field.parse::<CounterField>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("無效的欄位名稱".to_string()),
            }),
        )
            .into_response();
    };

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"lineId\": \"...\"}").into_response(),
    };

    match state.store.increment_counter(&request.line_id, field).await {
        Ok(Some(participant)) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(record_json(participant)),
                error: None,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("未找到符合的 ID".to_string()),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Counter increment failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
