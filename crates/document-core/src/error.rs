//! Error taxonomy for document persistence.
//!
//! Every failure is local to the operation that raised it and leaves the
//! document model in its pre-operation state, except where the save pipeline
//! documents otherwise (a consumed encoding override stays consumed).

use std::io;

use document_core_encoding::EncodingError;
use thiserror::Error;

/// Errors surfaced by document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not load file")]
    /// The location could not be read, or no supported encoding decodes it.
    Load(#[source] LoadFailure),

    #[error("could not restore file from a non-file source")]
    /// Revert was requested against a non-durable location.
    RevertNonDurable,

    #[error("could not encode document text")]
    /// The current text cannot be represented in the active encoding.
    Serialize(#[source] EncodingError),

    #[error("could not write file")]
    /// The serialized bytes could not be persisted.
    Write(#[source] io::Error),

    #[error("could not retrieve data to print")]
    /// Print was requested with no presentation surface attached.
    NoPrintContent,
}

/// Why a load failed.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("location could not be read")]
    /// Reading the bytes from storage failed.
    Io(#[from] io::Error),

    #[error("no supported encoding decodes the content")]
    /// The bytes are not well-formed in any encoding the detector tries.
    Decode(#[from] EncodingError),
}

impl From<LoadFailure> for DocumentError {
    fn from(failure: LoadFailure) -> Self {
        DocumentError::Load(failure)
    }
}
