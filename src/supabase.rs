use crate::state::AppState;
use http::header::{InvalidHeaderValue, AUTHORIZATION};
use http::{HeaderValue, StatusCode};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// User record returned by the Supabase Auth user endpoint.
///
/// Only `email` is consumed by the handlers; the rest is carried through
/// as returned by the provider. Unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserIdentity {
    /// Unique identifier for the user
    pub id: String,
    /// User's email address
    pub email: String,
    /// Audience claim (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Role assigned by the provider (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Account creation timestamp as reported by the provider (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Additional user attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub user_metadata: HashMap<String, serde_json::Value>,
}

/// Errors that can occur when introspecting a token against Supabase Auth
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to build request to Supabase Auth: {0}")]
    BuildError(#[from] InvalidHeaderValue),
    #[error("Failed to send request to Supabase Auth: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Supabase Auth rejected the token with status: {0}")]
    InvalidStatus(StatusCode),
    #[error("Failed to parse Supabase Auth response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Introspect a bearer token by fetching the user it belongs to.
///
/// Any failure (rejected token, unreachable provider, unparsable response)
/// surfaces as an `IntrospectionError`; callers decide how much of that
/// detail to expose.
pub async fn get_user(state: &AppState, token: &str) -> Result<UserIdentity, IntrospectionError> {
    let url = state.config.supabase.get_url("/auth/v1/user");
    debug!("Introspecting token against Supabase Auth at: {}", url);

    // The `apikey` header is a default header of the client; the user token
    // goes into the per-request Authorization header.
    let auth_value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    let response = state
        .supabase_client
        .get(&url)
        .header(AUTHORIZATION, auth_value)
        .send()
        .await?;

    // Check if the request was successful
    if !response.status().is_success() {
        let status = response.status();
        return Err(IntrospectionError::InvalidStatus(status));
    }

    // Parse the response body
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
