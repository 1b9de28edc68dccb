//! Errors raised while reading a SNAP document

use thiserror::Error;

/// Why a document could not be turned into a graph
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("malformed element #{index}: {reason}")]
    MalformedElement { index: usize, reason: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocumentError {
    pub(crate) fn element(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedElement {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
