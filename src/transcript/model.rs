//! Response payload types

use serde::Serialize;

use crate::subtitle::Segment;
use crate::youtube::CaptionTrack;

/// Language reported when the chosen track has no language code
const UNKNOWN_LANGUAGE: &str = "unknown";

/// Where the transcript text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TranscriptSource {
    #[serde(rename = "innertube (auto-ASR)")]
    AutoAsr,
    #[serde(rename = "innertube (manual)")]
    Manual,
}

/// Complete transcript for one video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    pub video_id: String,
    pub language: String,
    pub source: TranscriptSource,
    pub segments: Vec<Segment>,
}

impl TranscriptResult {
    pub fn new(video_id: String, track: &CaptionTrack, segments: Vec<Segment>) -> Self {
        let language = if track.language_code.is_empty() {
            UNKNOWN_LANGUAGE.to_string()
        } else {
            track.language_code.clone()
        };
        let source = if track.is_asr() {
            TranscriptSource::AutoAsr
        } else {
            TranscriptSource::Manual
        };

        Self {
            video_id,
            language,
            source,
            segments,
        }
    }
}
