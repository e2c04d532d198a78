//! Error types for IGE chain operations

use thiserror::Error;

/// Misuse of an IGE chain.
///
/// Every variant is returned before any output byte is written, so a failed
/// call leaves both the destination buffer and the chain state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IgeError {
    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Invalid IV length {actual} (must be twice the block size, {expected})")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("Input length {len} is not a positive multiple of the block size {block_size}")]
    NotBlockAligned { len: usize, block_size: usize },

    #[error("Output buffer too small: need {needed} bytes, have {available}")]
    OutputTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, IgeError>;
