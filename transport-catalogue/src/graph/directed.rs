//! Directed weighted graph with per-edge metadata.

/// Index of a vertex, `0..vertex_count`.
pub type VertexId = usize;

/// Index of an edge in insertion order.
pub type EdgeId = usize;

/// Error from graph construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    /// Weights must be finite and non-negative
    #[error("invalid edge weight {0}")]
    InvalidWeight(f64),
}

/// A directed edge. `meta` is carried through searches untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<M> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub meta: M,
}

/// Adjacency-list graph. Parallel edges are kept.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<M> {
    edges: Vec<Edge<M>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<M> DirectedWeightedGraph<M> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge, returning its id.
    pub fn add_edge(&mut self, edge: Edge<M>) -> Result<EdgeId, GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [edge.from, edge.to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight(edge.weight));
        }

        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<M>> {
        self.edges.get(id)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<M>] {
        &self.edges
    }

    /// Ids of edges leaving `vertex`. Empty for unknown vertices.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
