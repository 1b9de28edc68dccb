//! Errors from obtaining a document and building it

use crate::document::DocumentError;
use thiserror::Error;

/// Why a document could not be acquired or built
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("no transport available to retrieve {0}")]
    TransportUnavailable(String),

    #[error("failed to retrieve {location}: {source}")]
    Transport {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type for acquisition
pub type AcquireResult<T> = Result<T, AcquireError>;
