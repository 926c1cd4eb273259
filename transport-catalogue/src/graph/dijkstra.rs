//! Single-pair shortest paths.
//!
//! Plain Dijkstra over a binary heap. Every call owns its working set, so
//! any number of searches may run against one shared graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::directed::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path: total weight and edges in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Flipped on cost so that `BinaryHeap` pops the cheapest state first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `from` to `to`.
///
/// Returns `None` if `to` is unreachable or either vertex is not in the
/// graph. A query from a vertex to itself is the empty path of weight zero.
///
/// # Examples
///
/// ```
/// use transport_catalogue::graph::{DirectedWeightedGraph, Edge, shortest_path};
///
/// let mut graph = DirectedWeightedGraph::new(3);
/// graph.add_edge(Edge { from: 0, to: 1, weight: 2.0, meta: () }).unwrap();
/// graph.add_edge(Edge { from: 1, to: 2, weight: 3.0, meta: () }).unwrap();
/// graph.add_edge(Edge { from: 0, to: 2, weight: 9.0, meta: () }).unwrap();
///
/// let path = shortest_path(&graph, 0, 2).unwrap();
/// assert_eq!(path.weight, 5.0);
/// assert_eq!(path.edges, vec![0, 1]);
///
/// assert!(shortest_path(&graph, 2, 0).is_none());
/// ```
pub fn shortest_path<M>(
    graph: &DirectedWeightedGraph<M>,
    from: VertexId,
    to: VertexId,
) -> Option<PathInfo> {
    let vertex_count = graph.vertex_count();
    if from >= vertex_count || to >= vertex_count {
        return None;
    }
    if from == to {
        return Some(PathInfo {
            weight: 0.0,
            edges: Vec::new(),
        });
    }

    let mut dist = vec![f64::INFINITY; vertex_count];
    // Edge through which each vertex was last improved.
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; vertex_count];
    let mut heap = BinaryHeap::new();

    dist[from] = 0.0;
    heap.push(State {
        cost: 0.0,
        vertex: from,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == to {
            break;
        }
        // Stale entry: a cheaper path was already settled.
        if cost > dist[vertex] {
            continue;
        }

        for &edge_id in graph.outgoing(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let next = cost + edge.weight;
            if next < dist[edge.to] {
                dist[edge.to] = next;
                prev_edge[edge.to] = Some(edge_id);
                heap.push(State {
                    cost: next,
                    vertex: edge.to,
                });
            }
        }
    }

    if dist[to].is_infinite() {
        return None;
    }

    let mut edges = Vec::new();
    let mut vertex = to;
    while let Some(edge_id) = prev_edge[vertex] {
        edges.push(edge_id);
        vertex = graph.edge(edge_id)?.from;
        if vertex == from {
            break;
        }
    }
    edges.reverse();

    Some(PathInfo {
        weight: dist[to],
        edges,
    })
}
