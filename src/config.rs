//! Server configuration

use serde::{Deserialize, Serialize};

/// Upstream (YouTube) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL for the watch page, the player API and relative track URLs
    pub base_url: String,

    /// Accept-Language sent when fetching the watch page
    pub accept_language: String,

    /// Client identity declared to the player API
    pub client_name: String,

    /// Client version declared to the player API
    pub client_version: String,

    /// Optional User-Agent for all upstream requests
    pub user_agent: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            accept_language: "es-ES,es;q=0.9,en;q=0.8".to_string(),
            // The player API only returns caption tracks for some clients.
            client_name: "ANDROID".to_string(),
            client_version: "20.50.37".to_string(),
            user_agent: None,
        }
    }
}

impl UpstreamConfig {
    /// Base URL without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON
    pub log_json: bool,

    /// Language preference used when a request has no `langs` parameter
    pub default_langs: String,

    /// Upstream configuration
    pub upstream: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_json: false,
            default_langs: "es,en".to_string(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
