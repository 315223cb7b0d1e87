#![allow(dead_code)]

pub mod assertions;

use tracing_subscriber::{EnvFilter, fmt};

// "Hello, " is 7 bytes and "世" "界" are 3 bytes; 9 runes in total.
pub const HELLO: &str = "Hello, 世界";

/// Route crate events to the test writer so `cargo test -- --nocapture`
/// shows them. Safe to call from every test.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strlimit=trace"));
    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
