use serde::{Deserialize, Serialize};

/// Connection settings for the hosted auth/data service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://xyz.supabase.co`.
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,
}

fn default_backend_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: String::new(),
        }
    }
}

impl BackendConfig {
    /// URL with any trailing `/` removed, so paths can be appended.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            log_level: default_log_level(),
        }
    }
}
