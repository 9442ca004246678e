//! WebVTT cue segmenting
//!
//! Scans caption text line by line. A timing line (`start --> end`) opens a
//! cue; the non-empty lines after it are the cue's text until the next timing
//! line. Lines before the first timing line are the file header and metadata
//! (`WEBVTT`, `Kind:`, `Language:`) and never become text.

use serde::Serialize;

use super::timestamp::parse_timestamp_ms;

/// Arrow separating the start and end timestamps of a cue
const CUE_ARROW: &str = "-->";

/// One timed transcript segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Start time in milliseconds
    pub start: u64,
    /// End time in milliseconds
    pub end: u64,
    /// `end - start`, clamped at zero
    pub duration: u64,
    /// Markup-free text with whitespace collapsed
    pub text: String,
}

impl Segment {
    /// Create a segment; text is normalized and duration derived from the times
    pub fn new(start: u64, end: u64, text: &str) -> Self {
        Self {
            start,
            end,
            duration: end.saturating_sub(start),
            text: normalize_text(text),
        }
    }
}

/// Cue being accumulated while scanning
struct OpenCue {
    start: u64,
    end: u64,
    lines: Vec<String>,
}

impl OpenCue {
    fn from_timing_line(line: &str) -> Self {
        let (a, b) = line.split_once(CUE_ARROW).unwrap_or((line, ""));
        Self {
            start: parse_timestamp_ms(a),
            end: parse_timestamp_ms(b),
            lines: Vec::new(),
        }
    }

    fn finish(self) -> Option<Segment> {
        if self.lines.is_empty() {
            return None;
        }
        let segment = Segment::new(self.start, self.end, &self.lines.join(" "));
        (!segment.text.is_empty()).then_some(segment)
    }
}

/// Parse WebVTT text into segments, in source order.
///
/// Cues whose text is empty after normalization are dropped. Malformed
/// timestamps parse as zero instead of failing the whole document. Text
/// before the first timing line (header, `Kind:`/`Language:` metadata) is
/// discarded; it never becomes a segment.
pub fn parse_segments(vtt: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Option<OpenCue> = None;

    for raw in vtt.lines() {
        let line = raw.trim();

        if line.contains(CUE_ARROW) {
            if let Some(segment) = current.take().and_then(OpenCue::finish) {
                segments.push(segment);
            }
            current = Some(OpenCue::from_timing_line(line));
            continue;
        }

        if line.is_empty() || is_sequence_number(line) || is_header(line) {
            continue;
        }

        if let Some(cue) = current.as_mut() {
            cue.lines.push(strip_tags(line));
        }
    }

    if let Some(segment) = current.and_then(OpenCue::finish) {
        segments.push(segment);
    }

    segments
}

fn is_sequence_number(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_digit())
}

fn is_header(line: &str) -> bool {
    line.get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("WEBVTT"))
        .unwrap_or(false)
}

/// Remove inline markup such as `<c>`, `</c>`, `<i>` and karaoke timestamps
fn strip_tags(line: &str) -> String {
    regex!(r"<[^>]+>").replace_all(line, "").into_owned()
}

fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
