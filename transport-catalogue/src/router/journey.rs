//! Journey types.
//!
//! A `Journey` is the user-facing reading of a shortest path: for every
//! compiled edge, a wait at the boarding stop followed by a ride.

use std::sync::Arc;

use crate::domain::{BusId, StopId};
use crate::graph::{DirectedWeightedGraph, PathInfo};

use super::compiler::RideInfo;

/// One step of a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyItem {
    /// Waiting for a bus at a stop
    Wait { stop: StopId, time: f64 },
    /// Riding a bus for `span_count` stops
    Ride {
        bus: BusId,
        bus_name: Arc<str>,
        span_count: usize,
        time: f64,
    },
}

impl JourneyItem {
    /// Duration of this item in minutes.
    pub fn time(&self) -> f64 {
        match self {
            JourneyItem::Wait { time, .. } | JourneyItem::Ride { time, .. } => *time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, JourneyItem::Wait { .. })
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, JourneyItem::Ride { .. })
    }
}

/// A complete trip between two stops.
///
/// # Invariants
///
/// - Items alternate `Wait`, `Ride`, `Wait`, `Ride`, ...
/// - `total_time` is the weight of the underlying path
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    total_time: f64,
    items: Vec<JourneyItem>,
}

impl Journey {
    /// Decodes a path of compiled edges into wait and ride items.
    ///
    /// Returns `None` if the path names an edge `graph` does not have, that
    /// is, if the path was found in a different graph.
    pub fn from_path(
        graph: &DirectedWeightedGraph<RideInfo>,
        path: &PathInfo,
        wait_time: f64,
    ) -> Option<Self> {
        let edges = path
            .edges
            .iter()
            .map(|&id| graph.edge(id))
            .collect::<Option<Vec<_>>>()?;

        let mut items = Vec::with_capacity(edges.len() * 2);
        for edge in edges {
            items.push(JourneyItem::Wait {
                stop: StopId(edge.from),
                time: wait_time,
            });
            items.push(JourneyItem::Ride {
                bus: edge.meta.bus,
                bus_name: Arc::clone(&edge.meta.bus_name),
                span_count: edge.meta.span_count,
                time: edge.weight - wait_time,
            });
        }

        Some(Self {
            total_time: path.weight,
            items,
        })
    }

    /// Total time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn items(&self) -> &[JourneyItem] {
        &self.items
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ride()).count()
    }

    /// Whether the journey starts and ends at the same stop.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
