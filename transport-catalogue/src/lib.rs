//! Transport catalogue and journey planner.
//!
//! Holds a city's bus network (stops, buses, road distances), derives
//! per-bus and per-stop statistics, and answers "fastest way from stop A
//! to stop B" by compiling the network into a weighted graph. The network
//! can also be drawn as an SVG map.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod render;
pub mod requests;
pub mod router;
pub mod snapshot;
