use crate::transport::http::types::{json_422, ApiResponse, AppState, LineIdQuery, LinkRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

#[utoipa::path(
    post,
    path = "/linkLineID/",
    request_body = LinkRequest,
    responses(
        (status = 200, description = "Line ID bound to the participant", body = ApiResponse),
        (status = 400, description = "Line ID already bound elsewhere", body = ApiResponse),
        (status = 404, description = "No participant with this idNumber", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn link_line_id_handler(
    State(state): State<AppState>,
    request: Result<Json<LinkRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"idNumber\": \"...\", \"lineId\": \"...\"}").into_response()
        }
    };

    // Hold the link lock for the whole check-then-bind sequence so two
    // concurrent requests cannot both observe the lineId as free.
    let _link_guard = state.link_lock.lock().await;

    // Identity uniqueness is checked before existence: an idNumber match is
    // only consulted once the lineId is known to be free.
    match state.store.find_by_line_id(&request.line_id).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some("該 Line ID 已經存在，無法重複登入，請聯絡管理員!".to_string()),
                }),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Lookup by lineId failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    }

    match state.store.find_by_id_number(&request.id_number).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some("無參加此活動~".to_string()),
                }),
            )
                .into_response();
        }
        Err(e) => {
            warn!("Lookup by idNumber failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    }

    match state
        .store
        .bind_line_id(&request.id_number, &request.line_id)
        .await
    {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(serde_json::json!({ "message": "Line ID 已成功綁定到現有帳號" })),
                error: None,
            }),
        )
            .into_response(),
        // The preceding read saw the participant; a zero-match update here
        // means it vanished in between.
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("未找到符合的 ID".to_string()),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Line ID bind failed: {}", e);
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
    path = "/logout",
    request_body = LineIdQuery,
    responses(
        (status = 200, description = "Line ID cleared", body = ApiResponse),
        (status = 404, description = "No participant with this lineId", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn logout_handler(
    State(state): State<AppState>,
    request: Result<Json<LineIdQuery>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"lineId\": \"...\"}").into_response(),
    };

    match state.store.clear_line_id(&request.line_id).await {
        Ok(Some(_)) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(serde_json::json!({ "message": "刪除成功" })),
                error: None,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("刪除失敗，請聯絡管理員".to_string()),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Line ID clear failed: {}", e);
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
