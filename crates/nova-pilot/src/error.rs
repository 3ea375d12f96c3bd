//! Error types for pilot files.

use thiserror::Error;

/// Errors that can occur when working with pilot files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] nova_common::Error),

    /// Resource lookup error.
    #[error("{0}")]
    Resources(#[from] nova_resources::Error),

    /// The buffer length does not match the save layout.
    #[error("pilot data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The pilot state was written by a version this layout does not cover.
    #[error("unsupported pilot version {0:#06x}")]
    UnsupportedVersion(i16),

    /// A pilot resource was not found in the record source.
    #[error("pilot resource {0} not found")]
    MissingResource(i16),

    /// A string does not fit its fixed-size field.
    #[error("text of {len} bytes does not fit a {max}-byte field")]
    TextTooLong { len: usize, max: usize },
}

/// Result type for pilot operations.
pub type Result<T> = std::result::Result<T, Error>;
