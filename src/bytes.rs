use std::borrow::Cow;

use tracing::{debug, trace};

use crate::lossy::limit_decoded;

/// Limit `s` to at most `limit` bytes without splitting a multi-byte
/// character. Returns the original string if it already fits.
///
/// # Examples
/// ```
/// use strlimit::limit_bytes;
/// // "Hello, " is 7 bytes and "世" "界" are 3 bytes each.
/// assert_eq!(limit_bytes("Hello, 世界", 10), "Hello, 世");
/// assert_eq!(limit_bytes("Hello, 世界", 11), "Hello, 世");
/// assert_eq!(limit_bytes("Hello, 世界", 13), "Hello, 世界");
/// ```
pub fn limit_bytes(s: &str, limit: usize) -> &str {
    match cut_at(s, limit) {
        Some(at) => {
            trace!(limit, kept = at, end_len = 0, "truncated to byte limit");
            &s[..at]
        }
        None => s,
    }
}

/// Limit `s` to at most `limit` bytes and append `end` when anything was cut.
///
/// The bytes of `end` are reserved up front, so the kept prefix plus `end`
/// stays within `limit`. If `end` alone is longer than `limit` the result is
/// just `end`, which then exceeds the limit.
///
/// # Examples
/// ```
/// use strlimit::limit_bytes_with_end;
/// assert_eq!(limit_bytes_with_end("Hello, 世界", 12, ".."), "Hello, 世..");
/// assert_eq!(limit_bytes_with_end("Hello, 世界", 9, "..."), "Hello,...");
/// assert_eq!(limit_bytes_with_end("Hello, 世界", 20, "..."), "Hello, 世界");
/// ```
pub fn limit_bytes_with_end<'a>(s: &'a str, limit: usize, end: &str) -> Cow<'a, str> {
    let budget = limit.saturating_sub(end.len());
    let Some(at) = cut_at(s, budget) else {
        return Cow::Borrowed(s);
    };

    if end.len() > limit {
        debug!(
            limit,
            end_len = end.len(),
            "end marker alone exceeds byte limit"
        );
    }
    trace!(limit, kept = at, end_len = end.len(), "truncated to byte limit");

    if end.is_empty() {
        return Cow::Borrowed(&s[..at]);
    }
    let mut out = String::with_capacity(at + end.len());
    out.push_str(&s[..at]);
    out.push_str(end);
    Cow::Owned(out)
}

/// Like [`limit_bytes`], for input that may not be valid UTF-8.
///
/// Invalid sequences are replaced with U+FFFD before limiting, and the
/// replacement character counts with its encoded width of 3 bytes.
pub fn limit_bytes_lossy(bytes: &[u8], limit: usize) -> Cow<'_, str> {
    limit_decoded(bytes, |s| Cow::Borrowed(limit_bytes(s, limit)))
}

/// Like [`limit_bytes_with_end`], for input that may not be valid UTF-8.
pub fn limit_bytes_lossy_with_end<'a>(
    bytes: &'a [u8],
    limit: usize,
    end: &str,
) -> Cow<'a, str> {
    limit_decoded(bytes, |s| limit_bytes_with_end(s, limit, end))
}

/// Byte offset of the first character that would push the running total past
/// `budget`, or `None` when the whole of `s` fits.
fn cut_at(s: &str, budget: usize) -> Option<usize> {
    let mut remaining = budget;
    for (at, ch) in s.char_indices() {
        let size = ch.len_utf8();
        if remaining < size {
            return Some(at);
        }
        remaining -= size;
    }
    None
}
