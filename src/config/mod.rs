use crate::config::cors::CorsConfig;
use crate::config::supabase::SupabaseConfig;
use config::{Config as ConfigCrate, ConfigError};
use serde::Deserialize;

pub mod cors;
pub mod supabase;

fn default_port() -> u16 {
    8000
}

/// Main configuration structure for the gate server
#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// The port the server will listen to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Supabase Auth service configuration
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            supabase: SupabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl GateConfig {
    /// Creates a new Config instance from environment variables
    pub fn new() -> Result<Self, String> {
        ConfigCrate::builder()
            .add_source(
                config::Environment::with_prefix("GATE")
                    .prefix_separator("_")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e: ConfigError| e.to_string())?
            .try_deserialize()
            .map_err(|e| e.to_string())
    }

    #[cfg(test)]
    pub fn for_test_with_mocks(supabase_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            supabase: SupabaseConfig {
                url: supabase_mock.uri(),
                key: "test-anon-key".to_string(),
                timeout: 5,
            },
            cors: CorsConfig::default(),
        }
    }
}
