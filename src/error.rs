//! Error types for the contraction engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WickError {
    /// An odd number of fields has no complete pairing.
    #[error("Wick contractions yields zero since an off number of fields were given")]
    OddFieldCount { count: usize },

    #[error("ignore does not support the value: {0}")]
    UnsupportedIgnore(String),

    /// Unknown output mode, worded like an unknown `ignore` value.
    #[error("ignore does not support the value: {0}")]
    UnsupportedMode(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WickError>;
