use crate::domain::store::ParticipantStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ParticipantStore>,
    /// Serializes the check-then-bind critical section of the link
    /// operation; two concurrent link requests must not both observe a
    /// `lineId` as free. See `handlers::link`.
    pub link_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ParticipantStore>) -> Self {
        Self {
            store,
            link_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Payload for `POST /add_user/`. Every field is optional; counters default
/// to zero.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[serde(rename = "idNumber")]
    pub id_number: Option<String>,
    #[serde(rename = "lineId")]
    pub line_id: Option<String>,
    pub tel: Option<String>,
    #[serde(default, rename = "healthMeasurement")]
    pub health_measurement: i64,
    #[serde(default, rename = "healthEducation")]
    pub health_education: i64,
    #[serde(default)]
    pub exercise: i64,
}

/// Locator payload for the idNumber-keyed lookup.
#[derive(Deserialize, Debug, ToSchema)]
pub struct IdNumberQuery {
    #[serde(rename = "idNumber")]
    pub id_number: String,
}

/// Locator payload for the lineId-keyed operations.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LineIdQuery {
    #[serde(rename = "lineId")]
    pub line_id: String,
}

/// Payload for `POST /linkLineID/`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LinkRequest {
    #[serde(rename = "idNumber")]
    pub id_number: String,
    #[serde(rename = "lineId")]
    pub line_id: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}
