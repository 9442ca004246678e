//! Cue timestamp parsing

/// Convert a cue timestamp token into milliseconds.
///
/// Accepts `[hours:]minutes:seconds.millis` anywhere in the trimmed token, so
/// trailing cue settings (`align:start position:0%`) are ignored. A token that
/// does not contain a timestamp parses to `0` rather than failing, which keeps
/// one malformed cue from discarding the whole transcript. Only ASCII digits
/// count as timestamp digits.
pub fn parse_timestamp_ms(token: &str) -> u64 {
    let re = regex!(r"(?:([0-9]+):)?([0-9]{2}):([0-9]{2})\.([0-9]{3})");
    let Some(caps) = re.captures(token.trim()) else {
        return 0;
    };

    let field = |i: usize| -> Option<u64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(Some(0))
    };

    let (Some(hours), Some(minutes), Some(seconds), Some(millis)) =
        (field(1), field(2), field(3), field(4))
    else {
        return 0;
    };

    hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .and_then(|m| m.checked_mul(60))
        .and_then(|s| s.checked_add(seconds))
        .and_then(|s| s.checked_mul(1000))
        .and_then(|ms| ms.checked_add(millis))
        .unwrap_or(0)
}
