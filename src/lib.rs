//! strlimit - limit the size of a string without splitting a character.
//!
//! Two independent limiters:
//! - [`limit_bytes`] / [`limit_bytes_with_end`] bound the UTF-8 byte length
//! - [`limit_runes`] / [`limit_runes_with_end`] bound the number of chars
//!
//! The `_with_end` variants append a marker such as `"..."` when they cut,
//! and count the marker against the same limit.

pub mod bytes;
pub mod config;
pub mod error;
pub mod ext;
mod lossy;
pub mod runes;

pub use bytes::{
    limit_bytes, limit_bytes_lossy, limit_bytes_lossy_with_end, limit_bytes_with_end,
};
pub use config::{Limit, LimitUnit};
pub use error::{LimitError, Result};
pub use ext::StrLimit;
pub use runes::{
    limit_runes, limit_runes_lossy, limit_runes_lossy_with_end, limit_runes_with_end,
};
