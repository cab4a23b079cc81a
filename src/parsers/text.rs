/// Default cap on the number of body-text characters fed to the analyzer
pub const DEFAULT_MAX_BODY_CHARS: usize = 100_000;

/// Collapses all runs of whitespace (including newlines) into single spaces
/// and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates text to at most `max_chars` characters, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Normalizes visible body text for analysis.
///
/// Whitespace is collapsed first so that the cap counts meaningful characters,
/// then the result is truncated to `max_chars`.
pub fn normalize_body(text: &str, max_chars: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() > max_chars {
        ::log::debug!(
            "Truncating body text from {} to {} characters",
            collapsed.chars().count(),
            max_chars
        );
        truncate_chars(&collapsed, max_chars).trim_end().to_string()
    } else {
        collapsed
    }
}
