use serde::Deserialize;

fn default_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_timeout() -> u64 {
    5 // 5 seconds
}

/// Configuration for the Supabase Auth service
#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    /// Base URL of the Supabase project API (default: http://localhost:54321)
    #[serde(default = "default_url")]
    pub url: String,

    /// Project API key, sent as the `apikey` header on every request (default: empty)
    #[serde(default)]
    pub key: String,

    /// The timeout for Supabase Auth queries in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            key: "".to_string(),
            timeout: default_timeout(),
        }
    }
}

impl SupabaseConfig {
    /// Returns a properly formatted URL to the Supabase API with the given path
    pub fn get_url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.url.trim_end_matches('/'), path)
    }
}
