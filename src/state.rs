use crate::config::{supabase::SupabaseConfig, GateConfig};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GateConfig>,
    pub supabase_client: Arc<Client>,
}

impl AppState {
    pub fn new(config: GateConfig) -> Self {
        let client = Self::create_supabase_client(&config.supabase);
        Self {
            config: Arc::new(config),
            supabase_client: Arc::new(client),
        }
    }

    fn create_supabase_client(config: &SupabaseConfig) -> Client {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            config.key.parse().expect("Failed to parse Supabase key"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Create a specialized client for Supabase Auth with appropriate configurations
        Client::builder()
            // Set reasonable timeouts
            .timeout(Duration::from_secs(config.timeout))
            .connect_timeout(Duration::from_secs(2)) // 2 seconds timeout for connections
            .default_headers(headers)
            // Configure connection pool
            .pool_max_idle_per_host(10) // Keep up to 10 idle connections per host
            .pool_idle_timeout(Some(Duration::from_secs(90))) // Keep idle connections for 90 seconds
            // Build the client
            .build()
            .expect("Failed to create Supabase Auth client")
    }
}
