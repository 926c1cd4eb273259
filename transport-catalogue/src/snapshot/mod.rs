//! Catalogue snapshots.
//!
//! A snapshot holds everything needed to rebuild an equivalent catalogue
//! (same stop ids, same distance table, same statistics) along with the
//! routing and render settings, without replaying the request document it
//! came from.

mod error;
mod store;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, RouteType};
use crate::render::RenderSettings;
use crate::router::RoutingSettings;

pub use error::SnapshotError;
pub use store::SnapshotStore;

/// Stored stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub id: usize,
    pub name: String,
    pub coordinates: Coordinates,
}

/// Stored bus with its route as stop names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub route_type: RouteType,
    pub stops: Vec<String>,
}

/// Stored directed road distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub meters: f64,
}

/// Serializable image of a catalogue and its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stops: Vec<StopRecord>,
    pub buses: Vec<BusRecord>,
    pub distances: Vec<DistanceRecord>,
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
}

impl Snapshot {
    /// Capture a catalogue and optional routing settings.
    pub fn capture(catalogue: &TransportCatalogue, routing_settings: Option<RoutingSettings>) -> Self {
        let stop_name = |id: crate::domain::StopId| {
            catalogue
                .stop(id)
                .map(|stop| stop.name.clone())
                .unwrap_or_default()
        };

        let stops = catalogue
            .stops()
            .iter()
            .map(|stop| StopRecord {
                id: stop.id.index(),
                name: stop.name.clone(),
                coordinates: stop.coordinates,
            })
            .collect();

        let buses = catalogue
            .buses()
            .iter()
            .map(|bus| BusRecord {
                name: bus.name.clone(),
                route_type: bus.route_type,
                stops: bus.stops.iter().map(|&id| stop_name(id)).collect(),
            })
            .collect();

        let distances = catalogue
            .distances()
            .entries()
            .into_iter()
            .map(|(from, to, meters)| DistanceRecord {
                from: stop_name(from),
                to: stop_name(to),
                meters,
            })
            .collect();

        Self {
            stops,
            buses,
            distances,
            routing_settings,
            render_settings: None,
        }
    }

    pub fn with_render_settings(mut self, render_settings: Option<RenderSettings>) -> Self {
        self.render_settings = render_settings;
        self
    }

    /// Rebuild a frozen catalogue, returning it with the stored settings.
    ///
    /// # Errors
    ///
    /// Fails if stop ids are not `0..n` in order, or if the records do not
    /// form a consistent catalogue.
    pub fn restore(&self) -> Result<(TransportCatalogue, Option<RoutingSettings>), SnapshotError> {
        let mut catalogue = TransportCatalogue::new();

        for (expected, stop) in self.stops.iter().enumerate() {
            let id = catalogue.add_stop(&stop.name, stop.coordinates)?;
            if stop.id != expected || id.index() != expected {
                return Err(SnapshotError::StopIdMismatch {
                    name: stop.name.clone(),
                    stored: stop.id,
                    expected,
                });
            }
        }

        for distance in &self.distances {
            catalogue.set_distance(&distance.from, &distance.to, distance.meters)?;
        }

        for bus in &self.buses {
            catalogue.add_bus(&bus.name, &bus.stops, bus.route_type)?;
        }

        catalogue.set_buses_info()?;
        debug!(
            stops = self.stops.len(),
            buses = self.buses.len(),
            distances = self.distances.len(),
            "snapshot restored"
        );
        Ok((catalogue, self.routing_settings))
    }
}
