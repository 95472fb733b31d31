//! A directed graph with non-negative real edge weights.

/// Vertex identifier, in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge identifier, assigned in insertion order starting at 0.
pub type EdgeId = usize;

/// A weighted directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Directed graph over a fixed vertex range.
///
/// Edges are never removed, so edge ids stay valid for the lifetime of the
/// graph. Outgoing edges of each vertex are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is outside the vertex range or the weight is
    /// negative, infinite or NaN. Shortest-path search relies on both.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        assert!(
            edge.from < self.vertex_count() && edge.to < self.vertex_count(),
            "edge {} -> {} outside vertex range 0..{}",
            edge.from,
            edge.to,
            self.vertex_count()
        );
        assert!(
            edge.weight.is_finite() && edge.weight >= 0.0,
            "edge {} -> {} has invalid weight {}",
            edge.from,
            edge.to,
            edge.weight
        );

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get an edge by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`add_edge`](Self::add_edge).
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }
}
