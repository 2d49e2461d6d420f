use utoipa::OpenApi;

pub(crate) const ROUTES_TAG: &str = "Routes API";
pub(crate) const HEALTH_TAG: &str = "Health API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = ROUTES_TAG, description = "Public and protected application routes"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    ),
    paths(
        crate::api::routes::public_handler,
        crate::api::routes::protected_handler,
        crate::api::health::health_check,
    ),
    components(schemas(
        crate::api::routes::PublicResponse,
        crate::api::routes::ProtectedResponse,
        crate::api::health::Health,
    )),
    info(
        title = "Token Gate API",
        description = "Minimal backend with Supabase-gated routes",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;
