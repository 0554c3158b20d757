//! Configuration types for the EcoBot backend.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! All fields have defaults; the Gemini API key is deliberately absent here
//! and comes only from the `GEMINI_API_KEY` environment variable.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// User store file, relative to the data directory.
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Static asset directory served at `/`, relative to the working directory.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Gemini gateway settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_users_file() -> String {
    "users.json".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            users_file: default_users_file(),
            public_dir: default_public_dir(),
            gemini: GeminiConfig::default(),
        }
    }
}

/// Settings for the Gemini generative API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model identifier (e.g., "gemini-1.5-flash").
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, overridable for tests and proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds; expiry surfaces as an upstream error.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
