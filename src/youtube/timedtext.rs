//! Timedtext download of a chosen caption track

use tracing::debug;
use url::Url;

use super::YouTubeClient;
use crate::error::{Result, TranscriptError};

/// Format requested from the timedtext endpoint when the track URL has none
const CUE_FORMAT: &str = "vtt";

impl YouTubeClient {
    /// Download the raw WebVTT text of a caption track, optionally machine
    /// translated into `translate_to`.
    pub async fn download_subtitles(
        &self,
        base_url: &str,
        translate_to: Option<&str>,
    ) -> Result<String> {
        let root = Url::parse(self.base())?;
        let url = subtitle_url(&root, base_url, translate_to)?;
        debug!("Downloading subtitles: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranscriptError::upstream("timedtext", status));
        }

        Ok(response.text().await?)
    }
}

/// Build the timedtext URL for a track.
///
/// `fmt=vtt` is added only when the track URL carries no `fmt`, so an
/// explicit format is never overridden. `tlang` replaces any existing value.
/// Relative track URLs resolve against `root`.
pub fn subtitle_url(root: &Url, base_url: &str, translate_to: Option<&str>) -> Result<Url> {
    let mut url = root.join(base_url)?;

    let has_format = url.query_pairs().any(|(k, _)| k == "fmt");
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| translate_to.is_none() || k != "tlang")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.extend_pairs(&pairs);
        if !has_format {
            query.append_pair("fmt", CUE_FORMAT);
        }
        if let Some(lang) = translate_to {
            query.append_pair("tlang", lang);
        }
    }

    Ok(url)
}
