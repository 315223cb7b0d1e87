use std::borrow::Cow;

use crate::{bytes, runes};

/// Method-call form of the limiters.
///
/// ```
/// use strlimit::StrLimit;
/// assert_eq!("Hello, 世界".limit_bytes(10), "Hello, 世");
/// assert_eq!("Hello, 世界".limit_runes_with_end(8, "..."), "Hello...");
/// ```
pub trait StrLimit {
    fn limit_bytes(&self, limit: usize) -> &str;
    fn limit_bytes_with_end(&self, limit: usize, end: &str) -> Cow<'_, str>;
    fn limit_runes(&self, limit: usize) -> &str;
    fn limit_runes_with_end(&self, limit: usize, end: &str) -> Cow<'_, str>;
}

impl StrLimit for str {
    fn limit_bytes(&self, limit: usize) -> &str {
        bytes::limit_bytes(self, limit)
    }

    fn limit_bytes_with_end(&self, limit: usize, end: &str) -> Cow<'_, str> {
        bytes::limit_bytes_with_end(self, limit, end)
    }

    fn limit_runes(&self, limit: usize) -> &str {
        runes::limit_runes(self, limit)
    }

    fn limit_runes_with_end(&self, limit: usize, end: &str) -> Cow<'_, str> {
        runes::limit_runes_with_end(self, limit, end)
    }
}
