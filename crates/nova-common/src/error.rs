//! Error types for nova-common.

use thiserror::Error;

/// Common error type for Nova operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A read ran past the end of the buffer.
    #[error("unexpected end of buffer at offset {offset}: needed {needed} bytes but only {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// An integer width other than 1, 2, 4 or 8 bytes was requested.
    #[error("unsupported integer width: {0}")]
    InvalidWidth(usize),

    /// A string table declared more entries than its bytes hold.
    #[error("string table truncated at entry {entry} of {declared}: {available} bytes left")]
    StringTableTruncated {
        entry: usize,
        declared: usize,
        available: usize,
    },

    /// A type tag was not exactly four legacy characters.
    #[error("invalid type tag: {0:?}")]
    InvalidTag(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
