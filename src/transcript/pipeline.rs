//! Per-request transcript pipeline
//!
//! Strictly sequential: each upstream call needs the previous one's result.
//! Nothing is cached between requests and nothing is retried.

use tracing::info;

use super::model::TranscriptResult;
use super::select::select_track;
use crate::error::Result;
use crate::subtitle::parse_segments;
use crate::youtube::{extract_video_id, YouTubeClient};

/// Raw query parameters of a transcript request
#[derive(Debug, Default)]
pub struct TranscriptParams {
    /// Video id or URL
    pub url: Option<String>,
    /// Comma-separated language preference
    pub langs: Option<String>,
    /// Forced translation target
    pub tlang: Option<String>,
}

impl TranscriptParams {
    /// Collect decoded query pairs. A repeated key keeps its first value and
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut params.url,
                "langs" => &mut params.langs,
                "tlang" => &mut params.tlang,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Normalized transcript request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRequest {
    pub input: String,
    pub langs: Vec<String>,
    pub translate_to: Option<String>,
}

impl TranscriptRequest {
    /// Normalize query parameters. An absent or empty `langs` falls back to
    /// `default_langs`; an empty `tlang` means no translation.
    pub fn from_params(params: TranscriptParams, default_langs: &str) -> Self {
        let langs = params
            .langs
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| default_langs.to_string());

        Self {
            input: params.url.unwrap_or_default(),
            langs: parse_langs(&langs),
            translate_to: params.tlang.filter(|t| !t.is_empty()),
        }
    }
}

/// Lower-case, trim and split a comma-separated language list, dropping empties
pub fn parse_langs(list: &str) -> Vec<String> {
    list.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pipeline result; a video without captions is a normal outcome
#[derive(Debug)]
pub enum TranscriptOutcome {
    Found(TranscriptResult),
    NoSubtitles,
}

/// Run the whole pipeline for one request
pub async fn fetch_transcript(
    client: &YouTubeClient,
    request: &TranscriptRequest,
) -> Result<TranscriptOutcome> {
    let video_id = extract_video_id(&request.input)?;
    info!("Fetching transcript for {}", video_id);

    let api_key = client.resolve_api_key(&video_id).await?;
    let tracks = client.list_tracks(&video_id, &api_key).await?;

    let Some(track) = select_track(&tracks, &request.langs) else {
        info!("Video {} exposes no caption tracks", video_id);
        return Ok(TranscriptOutcome::NoSubtitles);
    };
    info!(
        "Selected {} track '{}' for {}",
        if track.is_asr() { "ASR" } else { "manual" },
        track.language_code,
        video_id
    );

    let vtt = client
        .download_subtitles(&track.base_url, request.translate_to.as_deref())
        .await?;
    let segments = parse_segments(&vtt);
    info!("Parsed {} segment(s) for {}", segments.len(), video_id);

    Ok(TranscriptOutcome::Found(TranscriptResult::new(
        video_id, track, segments,
    )))
}
