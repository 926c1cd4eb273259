//! Domain types for the transport catalogue.
//!
//! Stops and buses live in append-only arenas owned by the catalogue and
//! refer to each other by dense integer ids, never by reference.

mod bus;
mod error;
mod geo;
mod info;
mod stop;

pub use bus::{Bus, BusId, RouteType};
pub use error::CatalogueError;
pub use geo::{EARTH_RADIUS_M, compute_distance};
pub use info::{BusInfo, StopInfo};
pub use stop::{Coordinates, Stop, StopId};
