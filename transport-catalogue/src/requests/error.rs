//! Request processing error types.

use crate::domain::CatalogueError;
use crate::router::RouterError;
use crate::snapshot::SnapshotError;

/// Errors that abort processing of a request document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a valid request document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base requests describe an inconsistent network
    #[error("invalid base requests: {0}")]
    Catalogue(#[from] CatalogueError),

    /// Routing graph could not be compiled
    #[error("routing error: {0}")]
    Router(#[from] RouterError),

    /// Snapshot could not be written or read
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// A mode needs a document section that is absent
    #[error("missing {0} in request document")]
    MissingSection(&'static str),

    /// Unrecognised command-line mode
    #[error("unknown mode {0:?}, expected make_base or process_requests")]
    UnknownMode(String),
}
