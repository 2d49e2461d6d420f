use crate::state::AppState;
use crate::supabase::{self, UserIdentity};
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde_json::json;

/// Rejection produced when a protected route cannot authenticate the caller
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing token"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
        };
        let body = Json(json!({
            "detail": detail,
        }));
        (status, body).into_response()
    }
}

/// Extractor that guards protected routes.
///
/// Pulls the bearer token out of the Authorization header and validates it
/// against Supabase Auth on every request; nothing is cached across requests.
/// Handlers receive the resolved user record.
pub struct CurrentUser(pub UserIdentity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if header.is_empty() {
            warn!("Attempt to access protected resource without providing 'Authorization' header");
            return Err(AuthError::MissingToken);
        }

        // A header without the "Bearer " prefix is forwarded verbatim and left
        // for the provider to reject.
        let token = header.strip_prefix("Bearer ").unwrap_or(header);

        // Every failure mode (expired token, malformed token, provider outage,
        // network error) collapses into the same rejection; nothing
        // provider-internal reaches the caller.
        match supabase::get_user(state, token).await {
            Ok(user) => Ok(CurrentUser(user)),
            Err(err) => {
                warn!("Token introspection failed: {}", err);
                Err(AuthError::InvalidToken)
            }
        }
    }
}
