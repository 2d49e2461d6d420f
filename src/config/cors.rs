use serde::Deserialize;

fn default_origins() -> String {
    // Vite default port and common React dev port
    "http://localhost:5173,http://localhost:3000".to_string()
}

/// Configuration for cross-origin resource sharing
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    /// (default: "http://localhost:5173,http://localhost:3000")
    #[serde(default = "default_origins")]
    pub origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
        }
    }
}

impl CorsConfig {
    /// Get allowed origins as a vector
    pub fn origin_list(&self) -> Vec<String> {
        self.origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
