//! InnerTube API key discovery
//!
//! The key is embedded in every public watch page as a JSON assignment.
//! It is scraped fresh on every request and never cached.

use tracing::debug;

use super::YouTubeClient;
use crate::error::{Result, TranscriptError};

impl YouTubeClient {
    /// Fetch the watch page for `video_id` and extract its InnerTube API key.
    ///
    /// The page status is not checked; a page without the key fails with
    /// `KeyNotFound` either way.
    pub async fn resolve_api_key(&self, video_id: &str) -> Result<String> {
        let watch_url = format!("{}/watch", self.base());
        debug!("Fetching watch page: {}?v={}", watch_url, video_id);

        let html = self
            .http
            .get(&watch_url)
            .query(&[("v", video_id)])
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await?
            .text()
            .await?;

        extract_api_key(&html)
    }
}

/// Find the `"INNERTUBE_API_KEY":"..."` assignment in a watch page
pub fn extract_api_key(html: &str) -> Result<String> {
    regex!(r#""INNERTUBE_API_KEY":"([^"]+)""#)
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(TranscriptError::KeyNotFound)
}
