//! Stop types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense identifier of a stop, assigned in insertion order.
///
/// Doubles as the vertex index of the routing graph, so it stays stable
/// for the lifetime of the catalogue that issued it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the id as a plain index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Position in the catalogue.
    pub id: StopId,
    /// Unique, case-sensitive name.
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
        }
    }
}
