use crate::openapi::HEALTH_TAG;
use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Basic health check response
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct Health {
    status: &'static str,
}

/// Basic health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    )
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(Health { status: "ok" }))
}

/// Creates a router for health check routes
pub(super) fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
