//! InnerTube player API: caption track listing

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::YouTubeClient;
use crate::error::{Result, TranscriptError};

/// Caption track authorship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Human-authored captions
    Manual,
    /// Automatic speech recognition
    Asr,
}

/// One available caption stream for a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    /// BCP-47-ish language code, empty when upstream omitted it
    pub language_code: String,
    pub kind: TrackKind,
    /// Opaque fetch location for the subtitle resource
    pub base_url: String,
}

impl CaptionTrack {
    pub fn is_asr(&self) -> bool {
        self.kind == TrackKind::Asr
    }
}

// Wire format. Every level is optional: captions can be disabled, and the
// API omits whole objects rather than sending empty ones.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<RawCaptionTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCaptionTrack {
    language_code: Option<String>,
    kind: Option<String>,
    base_url: Option<String>,
}

impl PlayerResponse {
    /// `captions.playerCaptionsTracklistRenderer.captionTracks`, or empty
    fn into_tracks(self) -> Vec<CaptionTrack> {
        self.captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawCaptionTrack::into_track)
            .collect()
    }
}

impl RawCaptionTrack {
    /// A track without a fetch location cannot be downloaded and is skipped.
    fn into_track(self) -> Option<CaptionTrack> {
        let base_url = self.base_url.filter(|u| !u.is_empty())?;
        let kind = match self.kind.as_deref() {
            Some("asr") => TrackKind::Asr,
            _ => TrackKind::Manual,
        };
        Some(CaptionTrack {
            language_code: self.language_code.unwrap_or_default(),
            kind,
            base_url,
        })
    }
}

impl YouTubeClient {
    /// List the caption tracks the player API exposes for `video_id`.
    ///
    /// An empty list is a valid answer (captions disabled or absent).
    pub async fn list_tracks(&self, video_id: &str, api_key: &str) -> Result<Vec<CaptionTrack>> {
        let player_url = format!("{}/youtubei/v1/player", self.base());
        let body = json!({
            "context": {
                "client": {
                    "clientName": self.config.client_name,
                    "clientVersion": self.config.client_version,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .http
            .post(&player_url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscriptError::upstream("player", status));
        }

        let player: PlayerResponse = response.json().await?;
        let tracks = player.into_tracks();
        debug!("Player API listed {} caption track(s) for {}", tracks.len(), video_id);

        Ok(tracks)
    }
}
