//! In-memory transport catalogue.
//!
//! The catalogue is populated in one load phase (stops, then distances,
//! then buses) and frozen by [`TransportCatalogue::set_buses_info`], which
//! computes per-bus statistics. After that it is read-only.

mod distances;
mod stats;

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::domain::{Bus, BusId, BusInfo, CatalogueError, Coordinates, RouteType, Stop, StopId, StopInfo};

pub use distances::DistanceTable;

/// Stops, buses, road distances and derived bus statistics.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    /// Buses calling at each stop, indexed by `StopId`.
    stop_buses: Vec<BTreeSet<BusId>>,
    distances: DistanceTable,
    /// Indexed by `BusId`; `None` for buses with an empty route.
    bus_infos: Vec<Option<BusInfo>>,
    frozen: bool,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, returning its id.
    ///
    /// Adding a name that already exists leaves the catalogue unchanged and
    /// returns the existing id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Frozen`] once statistics have been computed.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        if let Some(&id) = self.stop_index.get(name) {
            return Ok(id);
        }
        if self.frozen {
            return Err(CatalogueError::Frozen);
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(id, name, coordinates));
        self.stop_index.insert(name.to_string(), id);
        self.stop_buses.push(BTreeSet::new());
        trace!(stop = name, id = id.index(), "added stop");
        Ok(id)
    }

    /// Add a bus whose route is given by stop names.
    ///
    /// Adding a name that already exists leaves the catalogue unchanged and
    /// returns the existing id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownStop`] if any stop on the route has
    /// not been added; nothing is inserted in that case.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        route_type: RouteType,
    ) -> Result<BusId, CatalogueError> {
        if let Some(&id) = self.bus_index.get(name) {
            return Ok(id);
        }
        if self.frozen {
            return Err(CatalogueError::Frozen);
        }

        let stops = stop_names
            .iter()
            .map(|stop| self.resolve(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusId(self.buses.len());
        for stop in &stops {
            self.stop_buses[stop.index()].insert(id);
        }
        self.buses.push(Bus::new(id, name, stops, route_type));
        self.bus_index.insert(name.to_string(), id);
        self.bus_infos.push(None);
        trace!(bus = name, "added bus");
        Ok(id)
    }

    /// Record the road distance from one stop to another, in meters.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownStop`] if either stop is missing and
    /// [`CatalogueError::InvalidDistance`] for a negative or non-finite value.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        if self.frozen {
            return Err(CatalogueError::Frozen);
        }
        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                meters,
            });
        }
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.distances.insert(from, to, meters);
        Ok(())
    }

    /// Road distance between two stops, falling back to the reverse direction.
    pub fn distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances.get(from, to)
    }

    /// Compute statistics for every bus with a non-empty route and freeze
    /// the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingDistance`] if two stops adjacent on a
    /// route have no recorded distance in either direction. The catalogue
    /// stays unfrozen in that case.
    pub fn set_buses_info(&mut self) -> Result<(), CatalogueError> {
        let mut infos = Vec::with_capacity(self.buses.len());
        for bus in &self.buses {
            let info = if bus.stops.is_empty() {
                None
            } else {
                Some(stats::bus_info(bus, &self.stops, &self.distances)?)
            };
            infos.push(info);
        }

        self.bus_infos = infos;
        self.frozen = true;
        debug!(
            stops = self.stops.len(),
            buses = self.buses.len(),
            distances = self.distances.len(),
            "catalogue frozen"
        );
        Ok(())
    }

    /// Whether [`set_buses_info`](Self::set_buses_info) has completed.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.index()])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.0])
    }

    /// Get a stop by id. Ids are only issued by this catalogue.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.0)
    }

    /// Statistics of a bus.
    ///
    /// Returns `None` for unknown buses, for buses with an empty route and
    /// before the catalogue is frozen.
    pub fn bus_info(&self, name: &str) -> Option<&BusInfo> {
        let id = self.bus_index.get(name)?;
        self.bus_infos.get(id.0)?.as_ref()
    }

    /// Buses calling at a stop, names ascending.
    ///
    /// Returns `None` only if the stop is unknown; a stop without buses
    /// yields an empty list.
    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        let &stop = self.stop_index.get(name)?;
        let mut buses: Vec<String> = self.stop_buses[stop.index()]
            .iter()
            .map(|bus| self.buses[bus.0].name.clone())
            .collect();
        buses.sort();
        Some(StopInfo { stop, buses })
    }

    /// All stops in id order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// All buses sorted by name, as a map renderer draws them.
    pub fn buses_by_name(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses.iter().collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));
        buses
    }

    /// Every recorded directed distance.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn resolve(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
