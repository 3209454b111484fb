//! Global configuration types for TallyAI.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls where
//! the web server listens and how the Tally server is reached.

use serde::{Deserialize, Serialize};

/// Top-level configuration for TallyAI.
///
/// Loaded from `~/.tallyai/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tally: TallyConfig,
}

/// Listen address of the web server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Connection settings for the Tally XML server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Base URL without port (e.g., "http://localhost").
    #[serde(default = "default_tally_url")]
    pub url: String,

    #[serde(default = "default_tally_port")]
    pub port: u16,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_tally_url() -> String {
    "http://localhost".to_string()
}

fn default_tally_port() -> u16 {
    9000
}

fn default_timeout_secs() -> u64 {
    30
}

impl TallyConfig {
    /// Full endpoint the XML requests are posted to: `{url}:{port}`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.url.trim_end_matches('/'), self.port)
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            url: default_tally_url(),
            port: default_tally_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
