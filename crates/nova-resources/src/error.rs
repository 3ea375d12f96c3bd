//! Error types for resource decoding.

use nova_common::TypeTag;
use thiserror::Error;

/// Boxed error returned by external collaborators (image codecs, containers).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while decoding resources.
#[derive(Debug, Error)]
pub enum Error {
    /// Common error (bounds violations, truncated string tables, I/O).
    #[error(transparent)]
    Common(#[from] nova_common::Error),

    /// A layout field decoded to a value its declared type cannot hold.
    #[error("field value {found} does not fit {expected}")]
    FieldType {
        expected: &'static str,
        found: &'static str,
    },

    /// Decoding a named field failed.
    #[error("field `{field}`: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Decoding a whole record failed.
    #[error("{tag} #{id}: {source}")]
    Decode {
        tag: TypeTag,
        id: i16,
        #[source]
        source: Box<Error>,
    },

    /// The image codec rejected a record's pixel data.
    #[error("image decode failed: {0}")]
    Image(#[source] CollaboratorError),

    /// The record source could not supply records.
    #[error("record source failed for {tag}: {source}")]
    Source {
        tag: TypeTag,
        #[source]
        source: CollaboratorError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn in_field(self, field: &'static str) -> Self {
        Error::Field {
            field,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_record(self, tag: TypeTag, id: i16) -> Self {
        Error::Decode {
            tag,
            id,
            source: Box::new(self),
        }
    }
}

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, Error>;
