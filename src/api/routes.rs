use crate::api::auth::CurrentUser;
use crate::openapi::ROUTES_TAG;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response type for the public route
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub(crate) struct PublicResponse {
    /// Fixed greeting message
    pub message: String,
}

/// Response type for the protected route
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub(crate) struct ProtectedResponse {
    /// Fixed greeting message
    pub message: String,
    /// Email address of the authenticated user
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = ROUTES_TAG,
    responses(
        (status = 200, description = "Public route reachable without authentication", body = PublicResponse)
    )
)]
pub(crate) async fn public_handler() -> Json<PublicResponse> {
    Json(PublicResponse {
        message: "Public route".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/protected",
    tag = ROUTES_TAG,
    params(
        ("Authorization" = String, Header, description = "Bearer token issued by Supabase Auth"),
    ),
    responses(
        (status = 200, description = "Token validated successfully", body = ProtectedResponse),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub(crate) async fn protected_handler(CurrentUser(user): CurrentUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "Protected route".to_string(),
        email: user.email,
    })
}

/// Combines the public and protected application routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public_handler))
        .route("/protected", get(protected_handler))
}
