//! Compiles bus routes into a routing graph and answers route queries.
//!
//! Each edge stands for one uninterrupted ride: boarding a bus at one stop
//! and staying on it for any number of stops. The wait time is folded into
//! the weight at the boarding end, so a plain single-criterion Dijkstra
//! already accounts for transfers.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, BusId, RouteType, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, GraphError, shortest_path};

use super::journey::Journey;
use super::settings::RoutingSettings;

/// Error from graph compilation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Statistics have not been computed yet
    #[error("catalogue must be frozen before compiling the routing graph")]
    CatalogueNotFrozen,

    /// Adjacent stops on a route without a recorded distance
    #[error("bus {bus}: no road distance between {from} and {to}")]
    MissingDistance { bus: String, from: String, to: String },

    /// Edge rejected by the graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Metadata of a compiled edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RideInfo {
    pub bus: BusId,
    pub bus_name: Arc<str>,
    /// Stop-to-stop hops covered by the ride.
    pub span_count: usize,
}

/// Routing graph compiled from a frozen catalogue.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RoutingSettings,
    graph: DirectedWeightedGraph<RideInfo>,
}

impl TransportRouter {
    /// Compile the routing graph.
    ///
    /// Emits one edge per ordered pair of stops reachable on a bus without
    /// getting off, which is quadratic in route length.
    ///
    /// # Errors
    ///
    /// Fails if the catalogue is not frozen or a route lacks a distance.
    pub fn new(catalogue: &TransportCatalogue, settings: RoutingSettings) -> Result<Self, RouterError> {
        if !catalogue.is_frozen() {
            return Err(RouterError::CatalogueNotFrozen);
        }

        let mut compiler = Compiler {
            catalogue,
            settings,
            graph: DirectedWeightedGraph::new(catalogue.stop_count()),
        };
        for bus in catalogue.buses() {
            compiler.add_forward_rides(bus)?;
            if bus.route_type == RouteType::Line {
                compiler.add_backward_rides(bus)?;
            }
        }

        let graph = compiler.graph;
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            wait_time = settings.bus_wait_time(),
            velocity = settings.bus_velocity(),
            "routing graph compiled"
        );

        Ok(Self { settings, graph })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<RideInfo> {
        &self.graph
    }

    /// Fastest journey between two stops.
    ///
    /// Returns `None` if `to` cannot be reached from `from`. A journey from a
    /// stop to itself is empty and takes no time.
    pub fn build_route(&self, from: StopId, to: StopId) -> Option<Journey> {
        let path = shortest_path(&self.graph, from.index(), to.index());
        debug!(
            from = from.index(),
            to = to.index(),
            found = path.is_some(),
            "route query"
        );
        path.and_then(|path| Journey::from_path(&self.graph, &path, self.settings.bus_wait_time()))
    }
}

struct Compiler<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: DirectedWeightedGraph<RideInfo>,
}

impl Compiler<'_> {
    /// Rides along the listed order.
    fn add_forward_rides(&mut self, bus: &Bus) -> Result<(), RouterError> {
        let stops = &bus.stops;
        let name: Arc<str> = Arc::from(bus.name.as_str());

        for i in 0..stops.len().saturating_sub(1) {
            let mut weight = self.settings.bus_wait_time();
            let mut span_count = 1;
            for j in i + 1..stops.len() {
                // A ring returning to its boarding stop is not a ride.
                if stops[j] == stops[i] {
                    continue;
                }
                weight += self.travel_time(bus, stops[j - 1], stops[j])?;
                self.add_ride(bus, &name, stops[i], stops[j], weight, span_count)?;
                span_count += 1;
            }
        }
        Ok(())
    }

    /// Rides along the return leg of a `Line` route.
    fn add_backward_rides(&mut self, bus: &Bus) -> Result<(), RouterError> {
        let stops = &bus.stops;
        let name: Arc<str> = Arc::from(bus.name.as_str());

        for i in (1..stops.len()).rev() {
            let mut weight = self.settings.bus_wait_time();
            let mut span_count = 1;
            for j in (1..=i).rev() {
                if stops[j - 1] == stops[i] {
                    continue;
                }
                weight += self.travel_time(bus, stops[j], stops[j - 1])?;
                self.add_ride(bus, &name, stops[i], stops[j - 1], weight, span_count)?;
                span_count += 1;
            }
        }
        Ok(())
    }

    fn travel_time(&self, bus: &Bus, from: StopId, to: StopId) -> Result<f64, RouterError> {
        let meters = self
            .catalogue
            .distance(from, to)
            .ok_or_else(|| RouterError::MissingDistance {
                bus: bus.name.clone(),
                from: self.stop_name(from),
                to: self.stop_name(to),
            })?;
        Ok(self.settings.travel_time(meters))
    }

    fn add_ride(
        &mut self,
        bus: &Bus,
        name: &Arc<str>,
        from: StopId,
        to: StopId,
        weight: f64,
        span_count: usize,
    ) -> Result<(), RouterError> {
        self.graph.add_edge(Edge {
            from: from.index(),
            to: to.index(),
            weight,
            meta: RideInfo {
                bus: bus.id,
                bus_name: Arc::clone(name),
                span_count,
            },
        })?;
        Ok(())
    }

    fn stop_name(&self, id: StopId) -> String {
        self.catalogue
            .stop(id)
            .map(|stop| stop.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
