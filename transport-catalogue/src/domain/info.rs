//! Derived statistics for buses and stops.

use super::{BusId, StopId};

/// Statistics of a bus route, computed once after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct BusInfo {
    pub bus: BusId,
    /// Stops visited along the full traversal.
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
    /// Great-circle length in meters.
    pub geo_length: f64,
    /// Road length in meters.
    pub route_length: f64,
    /// `route_length / geo_length`, or `0.0` when the geographic length is zero.
    pub curvature: f64,
}

impl BusInfo {
    /// Builds the statistics, guarding the curvature against a zero-length route.
    pub fn new(
        bus: BusId,
        stop_count: usize,
        unique_stop_count: usize,
        geo_length: f64,
        route_length: f64,
    ) -> Self {
        let curvature = if stop_count > 1 && geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };
        Self {
            bus,
            stop_count,
            unique_stop_count,
            geo_length,
            route_length,
            curvature,
        }
    }
}

/// Buses serving a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopInfo {
    pub stop: StopId,
    /// Names of serving buses, ascending.
    pub buses: Vec<String>,
}

impl StopInfo {
    /// True when the stop exists but no bus calls at it.
    pub fn has_no_buses(&self) -> bool {
        self.buses.is_empty()
    }
}
