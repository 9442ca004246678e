//! Video id extraction from user input

use url::Url;

use crate::error::{Result, TranscriptError};

/// Path prefixes on the standard host whose next segment is the video id
const ID_PATH_PREFIXES: [&str; 3] = ["shorts", "embed", "live"];

/// Resolve a raw video id or a YouTube URL into the video id.
///
/// Accepted shapes, checked in order:
/// - a bare 11-character id (`[A-Za-z0-9_-]{11}`)
/// - `youtu.be/<id>`
/// - `youtube.com/watch?v=<id>`
/// - `youtube.com/shorts/<id>`, `/embed/<id>`, `/live/<id>`
pub fn extract_video_id(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(TranscriptError::MissingInput);
    }

    if is_bare_id(input) {
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|_| TranscriptError::InvalidUrl)?;
    let host = url.host_str().unwrap_or_default();
    let mut parts = url
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());

    if host.contains("youtu.be") {
        return parts
            .next()
            .map(str::to_string)
            .ok_or(TranscriptError::UnresolvableId);
    }

    if host.contains("youtube.com") {
        if url.path() == "/watch" {
            let v = url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty());
            if let Some(v) = v {
                return Ok(v);
            }
        }

        if let (Some(prefix), Some(id)) = (parts.next(), parts.next()) {
            if ID_PATH_PREFIXES.contains(&prefix) {
                return Ok(id.to_string());
            }
        }
    }

    Err(TranscriptError::UnresolvableId)
}

fn is_bare_id(input: &str) -> bool {
    input.len() == 11
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
