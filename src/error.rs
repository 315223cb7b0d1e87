use thiserror::Error;

use crate::config::LimitUnit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("end marker is {end_len} {unit}, exceeds limit of {max}")]
    EndExceedsLimit {
        unit: LimitUnit,
        end_len: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, LimitError>;
