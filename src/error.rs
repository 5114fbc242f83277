//! Error types for the generation and verification tools
//!
//! This module defines all error types used by the library, providing
//! enough context in each failure to diagnose which check failed.

use thiserror::Error;

/// Errors raised while generating a random test file
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while verifying two files against each other
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The two files differ in total length; detected before any reads
    #[error("size mismatch: reference is {reference} bytes, candidate is {candidate} bytes")]
    SizeMismatch { reference: u64, candidate: u64 },

    /// A sampled block differed between the two files
    #[error(
        "after reading {bytes_read} bytes, block at offset {offset}, length {block_size} did not match"
    )]
    ContentMismatch {
        bytes_read: u64,
        offset: u64,
        block_size: usize,
    },

    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Line width of zero would make the generator loop without writing
    #[error("line width must be non-zero")]
    ZeroLineWidth,

    /// Block size of zero admits no block-aligned offsets
    #[error("block size must be non-zero")]
    ZeroBlockSize,
}

/// Specialized result types for the two tools
pub type GenerateResult<T> = std::result::Result<T, GenerateError>;
pub type VerifyResult<T> = std::result::Result<T, VerifyError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
