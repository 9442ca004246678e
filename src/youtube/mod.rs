//! YouTube upstream module
//!
//! This module talks to the three upstream collaborators, one call each per
//! request and never retried:
//! - Watch page scrape for the InnerTube API key
//! - InnerTube player API for the caption track list
//! - Timedtext endpoint for the subtitle text
//!
//! Video id extraction from user input lives here too.

pub mod key;
pub mod player;
pub mod timedtext;
pub mod video_id;

use std::sync::Arc;

use crate::config::UpstreamConfig;
use crate::error::Result;

pub use player::CaptionTrack;
pub use video_id::extract_video_id;

/// HTTP client for the YouTube endpoints.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    config: Arc<UpstreamConfig>,
}

impl YouTubeClient {
    /// Create a new client from the upstream configuration
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Upstream base URL without a trailing slash
    fn base(&self) -> &str {
        self.config.base()
    }
}
