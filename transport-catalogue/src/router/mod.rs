//! Journey routing over the transport catalogue.
//!
//! Bus routes are compiled into a graph whose edges are whole rides, then
//! searched with Dijkstra. The resulting edge sequence is read back as a
//! journey of waits and rides.

mod compiler;
mod journey;
mod settings;

#[cfg(test)]
mod router_tests;

pub use compiler::{RideInfo, RouterError, TransportRouter};
pub use journey::{Journey, JourneyItem};
pub use settings::{RoutingSettings, SettingsError};
