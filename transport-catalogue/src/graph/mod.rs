//! Generic directed weighted graph and shortest-path search.
//!
//! Nothing here knows about buses or stops: edges carry an opaque metadata
//! value that the search hands back untouched.

mod dijkstra;
mod directed;

pub use dijkstra::{PathInfo, shortest_path};
pub use directed::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};
