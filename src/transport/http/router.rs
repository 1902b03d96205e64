use crate::domain::participant::ParticipantRecord;
use crate::transport::http::handlers::{counters, health, link, participants};
use crate::transport::http::types::{
    ApiResponse, AppState, IdNumberQuery, LineIdQuery, LinkRequest, RegisterRequest,
};
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::keep_handler,
        participants::register_handler,
        participants::search_by_id_number_handler,
        participants::search_by_line_id_handler,
        link::link_line_id_handler,
        counters::increment_handler,
        participants::delete_handler,
        link::logout_handler
    ),
    components(schemas(
        ApiResponse,
        RegisterRequest,
        IdNumberQuery,
        LineIdQuery,
        LinkRequest,
        ParticipantRecord
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/keep/", get(health::keep_handler))
        .route("/add_user/", post(participants::register_handler))
        .route("/search/", get(participants::search_by_id_number_handler))
        .route("/searchLineID/", get(participants::search_by_line_id_handler))
        .route("/linkLineID/", post(link::link_line_id_handler))
        .route("/add/:field", put(counters::increment_handler))
        .route("/user/:id_number", delete(participants::delete_handler))
        .route("/logout", delete(link::logout_handler))
        .with_state(app_state)
}
