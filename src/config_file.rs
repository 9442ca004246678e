//! Configuration file support
//!
//! Loads server configuration from TOML files. Every table except `[server]`
//! is optional; missing tables and keys fall back to `ServerConfig::default()`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ServerConfig, UpstreamConfig};
use crate::error::{Result, TranscriptError};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Upstream settings
    pub upstream: Option<UpstreamSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Comma-separated language preference for requests without `langs`
    pub default_langs: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamSettings {
    pub base_url: Option<String>,
    pub accept_language: Option<String>,
    pub client_name: Option<String>,
    pub client_version: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| TranscriptError::Config(e.to_string()))
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let upstream = self.upstream.unwrap_or_default();
        let fallback = UpstreamConfig::default();

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            log_level: self
                .logging
                .as_ref()
                .map(|l| l.level.clone())
                .unwrap_or(defaults.log_level),
            log_json: self
                .logging
                .as_ref()
                .and_then(|l| l.format.as_deref())
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            default_langs: self.server.default_langs.unwrap_or(defaults.default_langs),
            upstream: UpstreamConfig {
                base_url: upstream.base_url.unwrap_or(fallback.base_url),
                accept_language: upstream.accept_language.unwrap_or(fallback.accept_language),
                client_name: upstream.client_name.unwrap_or(fallback.client_name),
                client_version: upstream.client_version.unwrap_or(fallback.client_version),
                user_agent: upstream.user_agent.or(fallback.user_agent),
            },
        }
    }
}

/// Load the server configuration from `path`.
///
/// Returns `Ok(None)` when the file does not exist, so callers can fall back
/// to `ServerConfig::default()`.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> Result<Option<ServerConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    ConfigFile::from_file(path).map(|cf| Some(cf.into_server_config()))
}
