//! Road distances between stops.
//!
//! Distances are directed: the road from A to B may differ from the road
//! from B to A. A lookup falls back to the reverse direction when only that
//! one was measured.

use std::collections::HashMap;

use crate::domain::StopId;

/// Directed road distances in meters, keyed by `(from, to)`.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(StopId, StopId), f64>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directed distance.
    ///
    /// If the reverse direction is already recorded with the same value the
    /// call is a no-op, so a symmetric pair is stored once. A different value
    /// is stored as its own forward entry next to the reverse one.
    pub fn insert(&mut self, from: StopId, to: StopId, meters: f64) {
        if self.distances.get(&(to, from)) == Some(&meters) {
            return;
        }
        self.distances.insert((from, to), meters);
    }

    /// Get the distance from `from` to `to`, falling back to `to` -> `from`.
    ///
    /// Returns `None` if neither direction was recorded.
    pub fn get(&self, from: StopId, to: StopId) -> Option<f64> {
        self.get_exact(from, to)
            .or_else(|| self.get_exact(to, from))
    }

    /// Get the distance recorded in exactly this direction.
    pub fn get_exact(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances.get(&(from, to)).copied()
    }

    /// Every recorded entry as `(from, to, meters)`, ordered by stop ids.
    pub fn entries(&self) -> Vec<(StopId, StopId, f64)> {
        let mut entries: Vec<_> = self
            .distances
            .iter()
            .map(|(&(from, to), &meters)| (from, to, meters))
            .collect();
        entries.sort_by_key(|&(from, to, _)| (from, to));
        entries
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
