//! Snapshot error types.

use crate::domain::CatalogueError;

/// Errors that can occur when saving or restoring a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    #[error("snapshot file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid snapshot
    #[error("malformed snapshot: {0}")]
    Format(#[from] serde_json::Error),

    /// Stop ids in the snapshot are not dense and ordered
    #[error("stop {name} stored with id {stored}, expected {expected}")]
    StopIdMismatch {
        name: String,
        stored: usize,
        expected: usize,
    },

    /// The snapshot describes an inconsistent catalogue
    #[error("inconsistent snapshot: {0}")]
    Catalogue(#[from] CatalogueError),
}
