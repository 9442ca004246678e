//! Application state management
//!
//! The state is read-only after startup: configuration plus the shared
//! upstream client. Requests share no mutable state.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::youtube::YouTubeClient;

/// Application state shared across all handlers
pub struct AppState {
    /// Upstream client
    pub youtube: YouTubeClient,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Result<Self> {
        Ok(Self {
            youtube: YouTubeClient::new(config.upstream.clone())?,
            config,
        })
    }
}
