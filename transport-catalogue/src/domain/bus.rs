//! Bus route types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StopId;

/// Dense identifier of a bus, assigned in insertion order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusId(pub usize);

impl fmt::Debug for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusId({})", self.0)
    }
}

/// Shape of a bus route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    /// The listed stops form a closed loop, traversed once.
    Ring,
    /// The listed stops are traversed forward, then back in reverse.
    Line,
}

impl RouteType {
    /// Maps the `is_roundtrip` flag of a bus record to a route type.
    pub fn from_roundtrip(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            RouteType::Ring
        } else {
            RouteType::Line
        }
    }

    pub fn is_roundtrip(self) -> bool {
        self == RouteType::Ring
    }
}

/// A bus and its route.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: BusId,
    pub name: String,
    /// Stops as listed, without the mirrored leg of a `Line` route.
    pub stops: Vec<StopId>,
    pub route_type: RouteType,
}

impl Bus {
    pub fn new(id: BusId, name: impl Into<String>, stops: Vec<StopId>, route_type: RouteType) -> Self {
        Self {
            id,
            name: name.into(),
            stops,
            route_type,
        }
    }

    /// Number of stops visited along the full traversal.
    pub fn stop_count(&self) -> usize {
        match (self.route_type, self.stops.len()) {
            (_, 0) => 0,
            (RouteType::Ring, n) => n,
            (RouteType::Line, n) => 2 * n - 1,
        }
    }

    /// Every stop visited in order, including the return leg of a `Line`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_catalogue::domain::{Bus, BusId, RouteType, StopId};
    ///
    /// let bus = Bus::new(BusId(0), "750", vec![StopId(0), StopId(1), StopId(2)], RouteType::Line);
    /// let route: Vec<usize> = bus.full_route().map(|s| s.0).collect();
    /// assert_eq!(route, vec![0, 1, 2, 1, 0]);
    /// ```
    pub fn full_route(&self) -> impl Iterator<Item = StopId> + '_ {
        let back = match self.route_type {
            RouteType::Ring => 0,
            RouteType::Line => self.stops.len().saturating_sub(1),
        };
        self.stops
            .iter()
            .copied()
            .chain(self.stops.iter().rev().skip(1).take(back).copied())
    }
}
