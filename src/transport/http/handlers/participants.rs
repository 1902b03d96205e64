use crate::domain::participant::Participant;
use crate::transport::http::handlers::common::record_json;
use crate::transport::http::types::{
    json_422, ApiResponse, AppState, IdNumberQuery, LineIdQuery, RegisterRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

#[utoipa::path(
    post,
    path = "/add_user/",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Participant inserted", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn register_handler(
    State(state): State<AppState>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"idNumber\": ...}").into_response(),
    };

    // No duplicate check on idNumber: registration inserts unconditionally.
    let participant = Participant {
        id: None,
        name: request.name,
        id_number: request.id_number,
        line_id: request.line_id,
        tel: request.tel,
        health_measurement: request.health_measurement,
        health_education: request.health_education,
        exercise: request.exercise,
    };

    match state.store.insert(participant).await {
        Ok(stored) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(record_json(stored)),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Participant insert failed: {}", e);
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

#[utoipa::path(
    get,
    path = "/search/",
    request_body = IdNumberQuery,
    responses(
        (status = 200, description = "Matching participant", body = ApiResponse),
        (status = 404, description = "No participant with this idNumber", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn search_by_id_number_handler(
    State(state): State<AppState>,
    request: Result<Json<IdNumberQuery>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"idNumber\": \"...\"}").into_response(),
    };

    match state.store.find_by_id_number(&request.id_number).await {
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
            warn!("Lookup by idNumber failed: {}", e);
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

#[utoipa::path(
    get,
    path = "/searchLineID/",
    request_body = LineIdQuery,
    responses(
        (status = 200, description = "Matching participant", body = ApiResponse),
        (status = 404, description = "No participant with this lineId", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn search_by_line_id_handler(
    State(state): State<AppState>,
    request: Result<Json<LineIdQuery>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"lineId\": \"...\"}").into_response(),
    };

    match state.store.find_by_line_id(&request.line_id).await {
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
            warn!("Lookup by lineId failed: {}", e);
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

#[utoipa::path(
    delete,
    path = "/user/{id_number}",
    params(
        ("id_number" = String, Path, description = "Natural identifier of the participant")
    ),
    responses(
        (status = 200, description = "Participant removed", body = ApiResponse),
        (status = 404, description = "No participant with this idNumber", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_number): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_by_id_number(&id_number).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("請確認 ID".to_string()),
            }),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(serde_json::json!({ "message": "刪除成功" })),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Delete by idNumber failed: {}", e);
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
