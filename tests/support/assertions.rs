pub fn assert_within_bytes(out: &str, limit: usize) {
    assert!(
        out.len() <= limit,
        "{out:?} is {} bytes, limit {limit}",
        out.len()
    );
}

pub fn assert_within_runes(out: &str, limit: usize) {
    let count = out.chars().count();
    assert!(count <= limit, "{out:?} is {count} runes, limit {limit}");
}

/// `out` is either `input` itself or a prefix of it followed by `end`.
pub fn assert_prefix_with_end(input: &str, out: &str, end: &str) {
    if out == input {
        return;
    }
    let kept = out
        .strip_suffix(end)
        .unwrap_or_else(|| panic!("{out:?} does not end with {end:?}"));
    assert!(
        input.starts_with(kept),
        "{kept:?} is not a prefix of {input:?}"
    );
}
