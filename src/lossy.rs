use std::borrow::Cow;

/// Decode `bytes` with the standard replacement convention and run `limit`
/// over the result, borrowing from `bytes` whenever the input was valid.
pub(crate) fn limit_decoded<'a, F>(bytes: &'a [u8], limit: F) -> Cow<'a, str>
where
    F: for<'s> FnOnce(&'s str) -> Cow<'s, str>,
{
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => limit(s),
        Cow::Owned(mut decoded) => {
            // A borrowed result is always a prefix of `decoded`.
            let kept = match limit(&decoded) {
                Cow::Owned(out) => return Cow::Owned(out),
                Cow::Borrowed(kept) => kept.len(),
            };
            decoded.truncate(kept);
            Cow::Owned(decoded)
        }
    }
}
