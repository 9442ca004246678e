//! Caption track ranking

use crate::youtube::CaptionTrack;

/// Penalty for machine-generated tracks; outweighs any language preference
const ASR_PENALTY: usize = 10;

/// Language score for tracks matching no preferred language
const UNMATCHED_LANGUAGE: usize = 5;

/// Rank of a track; lower is better.
///
/// `preferred_langs` must already be lower-cased.
pub fn track_score(track: &CaptionTrack, preferred_langs: &[String]) -> usize {
    let lang = track.language_code.to_lowercase();
    let affinity = preferred_langs
        .iter()
        .position(|pref| lang.starts_with(pref.as_str()))
        .unwrap_or(UNMATCHED_LANGUAGE);
    let base = if track.is_asr() { ASR_PENALTY } else { 0 };

    base + affinity
}

/// Pick the best track: manual over ASR, then earlier preferred languages.
///
/// Ties keep upstream order (`min_by_key` returns the first minimum).
/// Returns `None` only for an empty list.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    preferred_langs: &[String],
) -> Option<&'a CaptionTrack> {
    tracks
        .iter()
        .min_by_key(|track| track_score(track, preferred_langs))
}
