use std::borrow::Cow;

use tracing::{debug, trace};

use crate::lossy::limit_decoded;

/// Limit `s` to at most `limit` characters (Unicode scalar values).
///
/// # Examples
/// ```
/// use strlimit::limit_runes;
/// // "Hello, 世界" is 9 runes.
/// assert_eq!(limit_runes("Hello, 世界", 8), "Hello, 世");
/// assert_eq!(limit_runes("Hello, 世界", 9), "Hello, 世界");
/// ```
pub fn limit_runes(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((at, _)) => {
            trace!(limit, kept = limit, end_len = 0, "truncated to rune limit");
            &s[..at]
        }
        None => s,
    }
}

/// Limit `s` to at most `limit` characters and append `end` when anything was
/// cut.
///
/// Whether to cut is decided on the character count of `s` alone. Only once
/// truncation is certain are the characters of `end` taken out of the budget
/// for the kept prefix. If `end` alone is longer than `limit` the result is
/// just `end`.
///
/// # Examples
/// ```
/// use strlimit::limit_runes_with_end;
/// assert_eq!(limit_runes_with_end("Hello, 世界", 8, "..."), "Hello...");
/// assert_eq!(limit_runes_with_end("Hello, 世界", 9, "..."), "Hello, 世界");
/// ```
pub fn limit_runes_with_end<'a>(s: &'a str, limit: usize, end: &str) -> Cow<'a, str> {
    if s.chars().count() <= limit {
        return Cow::Borrowed(s);
    }

    let end_len = end.chars().count();
    if end_len > limit {
        debug!(limit, end_len, "end marker alone exceeds rune limit");
    }
    let kept = limit.saturating_sub(end_len);
    // `s` has more than `limit` characters, so the kept prefix always ends
    // before the last one.
    let at = s.char_indices().nth(kept).map_or(s.len(), |(at, _)| at);
    trace!(limit, kept, end_len, "truncated to rune limit");

    if end.is_empty() {
        return Cow::Borrowed(&s[..at]);
    }
    let mut out = String::with_capacity(at + end.len());
    out.push_str(&s[..at]);
    out.push_str(end);
    Cow::Owned(out)
}

/// Like [`limit_runes`], for input that may not be valid UTF-8.
///
/// Each invalid sequence becomes a single U+FFFD and counts as one rune.
pub fn limit_runes_lossy(bytes: &[u8], limit: usize) -> Cow<'_, str> {
    limit_decoded(bytes, |s| Cow::Borrowed(limit_runes(s, limit)))
}

/// Like [`limit_runes_with_end`], for input that may not be valid UTF-8.
pub fn limit_runes_lossy_with_end<'a>(
    bytes: &'a [u8],
    limit: usize,
    end: &str,
) -> Cow<'a, str> {
    limit_decoded(bytes, |s| limit_runes_with_end(s, limit, end))
}
