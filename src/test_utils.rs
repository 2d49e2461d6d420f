use crate::config::GateConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Test fixture for exercising the app against a mocked Supabase Auth server.
///
/// The fixture builds the application through the real `create_app`, with the
/// provider URL pointed at a wiremock server, and provides helpers for making
/// requests and asserting on responses.
///
/// # Examples
///
/// ```rust
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///
///     fixture
///         .add_user_mock("good-token", json!({ "id": "u1", "email": "a@b.com" }), StatusCode::OK, 1)
///         .await;
///
///     let response = fixture.get_with_token("/protected", "good-token").await;
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Application state (configuration and provider client)
    pub state: AppState,
    /// Mock server standing in for Supabase Auth
    pub supabase_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with a mock server for Supabase Auth.
    pub async fn new() -> Self {
        let supabase_mock = MockServer::start().await;
        let config = GateConfig::for_test_with_mocks(&supabase_mock);
        Self::with_config(config, supabase_mock).await
    }

    /// Creates a fixture whose provider URL points at a port nobody listens
    /// on, to exercise network-failure paths.
    pub async fn with_unreachable_provider() -> Self {
        let supabase_mock = MockServer::start().await;
        let mut config = GateConfig::for_test_with_mocks(&supabase_mock);
        config.supabase.url = "http://127.0.0.1:1".to_string();
        Self::with_config(config, supabase_mock).await
    }

    async fn with_config(config: GateConfig, supabase_mock: MockServer) -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let state = AppState::new(config);
        let app = create_app(state.clone()).await;

        Self {
            app,
            state,
            supabase_mock,
        }
    }

    /// Creates a request builder with a JSON content type and no
    /// authorization header; tests add credentials explicitly.
    pub fn request_builder(&self, method: Method, uri: impl AsRef<str>) -> http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri.as_ref())
            .header("Content-Type", "application/json")
    }

    /// Sends a GET request without any authorization header.
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = self
            .request_builder(Method::GET, uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a GET request with `Authorization: Bearer <token>`.
    pub async fn get_with_token(&self, uri: impl AsRef<str>, token: &str) -> TestResponse {
        self.get_with_auth_header(uri, &format!("Bearer {token}"))
            .await
    }

    /// Sends a GET request with a raw `Authorization` header value.
    pub async fn get_with_auth_header(&self, uri: impl AsRef<str>, value: &str) -> TestResponse {
        let request = self
            .request_builder(Method::GET, uri)
            .header("Authorization", value)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and returns a TestResponse.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Try to parse as JSON, defaulting to empty object if parsing fails or empty body
        let json = if !body.is_empty() {
            serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}))
        } else {
            serde_json::json!({})
        };

        TestResponse { status, json }
    }

    /// Adds a mock for the Supabase Auth user endpoint, matched on the
    /// outbound `Authorization: Bearer <token>` header.
    ///
    /// # Parameters
    ///
    /// - `token`: The token the gate is expected to forward
    /// - `response_body`: The JSON response body to return
    /// - `status_code`: HTTP status code for the response
    /// - `expected_calls`: Number of expected calls to this mock
    pub async fn add_user_mock(
        &self,
        token: &str,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("GET"))
            .and(matchers::path("/auth/v1/user"))
            .and(matchers::header("apikey", "test-anon-key"))
            .and(matchers::header(
                "Authorization",
                format!("Bearer {token}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.supabase_mock)
            .await;
    }
}

/// Response from a test request that provides convenient access to status and JSON body.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON (if present and valid JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code.
    ///
    /// # Panics
    ///
    /// Panics if the status code doesn't match the expected value.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            serde_json::to_string_pretty(&self.json).unwrap_or_default()
        );
        self
    }

    /// Asserts that the response status is OK (200).
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    /// Converts the response body to the specified type.
    ///
    /// # Panics
    ///
    /// Panics if the body cannot be deserialized into `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json.clone()).expect("Failed to deserialize response body")
    }
}
