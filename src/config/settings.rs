// Configuration structs

use serde::Deserialize;

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Local development frontends allowed by CORS
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Generation model provider
    pub provider: ProviderSettings,

    /// HTTP server settings
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Provider name ("gemini" or "claude")
    pub name: String,

    /// API key read from the environment
    pub api_key: String,

    /// Model override (provider default when None)
    pub model: Option<String>,

    /// API root override, mostly for tests and proxies
    pub base_url: Option<String>,

    /// Per-request timeout for upstream calls
    pub request_timeout_secs: u64,
}

impl ProviderSettings {
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
            model: None,
            base_url: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,

    /// Exact origins accepted by CORS
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn new(provider: ProviderSettings) -> Self {
        Self {
            provider,
            server: ServerConfig::default(),
        }
    }
}

/// Environment variable holding the API key for a provider
pub fn api_key_var(provider: &str) -> Option<&'static str> {
    match provider {
        "gemini" => Some("GEMINI_API_KEY"),
        "claude" => Some("ANTHROPIC_API_KEY"),
        _ => None,
    }
}
