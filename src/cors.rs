use crate::config::GateConfig;
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Apply the CORS policy to the given router.
///
/// Origins come from the allowlist in config (exact match). Credentials are
/// allowed, so wildcard origins/methods/headers must not be used; methods and
/// headers are mirrored from the request instead.
pub(crate) fn apply(router: Router, config: &GateConfig) -> Router {
    let allowed: Vec<HeaderValue> = config
        .cors
        .origin_list()
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    router.layer(cors)
}
