//! On-disk snapshot file.

use std::path::{Path, PathBuf};

use tracing::info;

use super::Snapshot;
use super::error::SnapshotError;

/// A snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the snapshot, replacing any previous file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            stops = snapshot.stops.len(),
            buses = snapshot.buses.len(),
            "snapshot saved"
        );
        Ok(())
    }

    /// Read the snapshot back.
    pub fn load(&self) -> Result<Snapshot, SnapshotError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            stops = snapshot.stops.len(),
            buses = snapshot.buses.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
