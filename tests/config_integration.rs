//! Loading a `Limit` from serialized configuration and applying it.

mod support;

use strlimit::{Limit, LimitError, LimitUnit};
use support::HELLO;

#[test]
fn deserializes_full_limit() {
    let limit: Limit =
        serde_json::from_str(r#"{ "unit": "runes", "max": 8, "end": "..." }"#).expect("parse");
    assert_eq!(limit, Limit::runes(8).with_end("..."));
    assert_eq!(limit.apply(HELLO), "Hello...");
}

#[test]
fn unit_and_end_default() {
    let limit: Limit = serde_json::from_str(r#"{ "max": 10 }"#).expect("parse");
    assert_eq!(limit.unit, LimitUnit::Bytes);
    assert!(limit.end.is_empty());
    assert_eq!(limit.apply(HELLO), "Hello, 世");
}

#[test]
fn rejects_unknown_unit() {
    let err = serde_json::from_str::<Limit>(r#"{ "unit": "graphemes", "max": 1 }"#)
        .expect_err("must fail");
    assert!(err.to_string().contains("unknown variant"));
}

#[test]
fn rejects_missing_max() {
    assert!(serde_json::from_str::<Limit>(r#"{ "unit": "bytes" }"#).is_err());
}

#[test]
fn serializes_unit_lowercase() {
    let json = serde_json::to_value(Limit::bytes(12).with_end("..")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "unit": "bytes", "max": 12, "end": ".." })
    );
}

#[test]
fn strict_apply_reports_oversized_end() {
    support::init_tracing();
    let limit: Limit =
        serde_json::from_str(r#"{ "unit": "bytes", "max": 2, "end": "…" }"#).expect("parse");

    // Lenient path keeps the current behaviour and overruns the limit.
    assert_eq!(limit.apply(HELLO), "…");

    let err = limit.try_apply(HELLO).expect_err("must fail");
    assert_eq!(err.to_string(), "end marker is 3 bytes, exceeds limit of 2");
    assert!(matches!(
        err,
        LimitError::EndExceedsLimit {
            unit: LimitUnit::Bytes,
            ..
        }
    ));
}

#[test]
fn strict_apply_passes_through_fitting_text() {
    let limit = Limit::runes(20).with_end("…");
    assert!(limit.fits(HELLO));
    assert_eq!(limit.try_apply(HELLO).expect("valid"), HELLO);
}
