//! Dijkstra shortest paths over a [`DirectedWeightedGraph`].
//!
//! Each search allocates its own distance table and heap, so one engine can
//! answer queries from several threads at once. Finished single-source trees
//! may be kept in a [`TreeCache`] and reused by later queries from the same
//! source.
//!
//! Ties are broken deterministically: among heap entries of equal cost the
//! lower vertex id is settled first, and an edge only replaces a vertex's
//! predecessor when it is strictly shorter. With a fixed edge insertion
//! order the same path is returned on every run.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use tracing::trace;

use super::digraph::{DirectedWeightedGraph, EdgeId, VertexId};
use crate::cache::{CacheConfig, TreeCache};

/// A shortest path: its total weight and the edges along it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

impl RouteInfo {
    /// The path from a vertex to itself.
    pub fn empty() -> Self {
        Self {
            weight: 0.0,
            edges: Vec::new(),
        }
    }
}

/// Heap entry. Ordered so that `BinaryHeap` pops the cheapest entry first,
/// and the lowest vertex among equally cheap ones.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Shortest paths from one source to every vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    /// Best known distance; `f64::INFINITY` for unreached vertices.
    dist: Vec<f64>,
    /// Edge that last improved each vertex.
    prev_edge: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    /// The vertex the tree was grown from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source to `target`, if reachable.
    pub fn distance_to(&self, target: VertexId) -> Option<f64> {
        self.dist.get(target).copied().filter(|d| d.is_finite())
    }

    /// Reconstruct the path from the source to `target`.
    pub fn route_to(&self, graph: &DirectedWeightedGraph, target: VertexId) -> Option<RouteInfo> {
        let weight = self.distance_to(target)?;

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge_id) = self.prev_edge[current] {
            edges.push(edge_id);
            current = graph.edge(edge_id).from;
        }
        debug_assert_eq!(current, self.source, "predecessor chain must end at the source");
        edges.reverse();

        Some(RouteInfo { weight, edges })
    }
}

/// Run Dijkstra from `source`, stopping early once `target` is settled.
fn search(
    graph: &DirectedWeightedGraph,
    source: VertexId,
    target: Option<VertexId>,
) -> ShortestPathTree {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        if Some(vertex) == target {
            break;
        }

        for &edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            let new_cost = cost + edge.weight;
            if new_cost < dist[edge.to] {
                dist[edge.to] = new_cost;
                prev_edge[edge.to] = Some(edge_id);
                heap.push(State {
                    cost: new_cost,
                    vertex: edge.to,
                });
            }
        }
    }

    ShortestPathTree {
        source,
        dist,
        prev_edge,
    }
}

/// Build the full shortest-path tree rooted at `source`.
///
/// # Panics
///
/// Panics if `source` is not a vertex of `graph`.
pub fn shortest_path_tree(graph: &DirectedWeightedGraph, source: VertexId) -> ShortestPathTree {
    assert_vertex(graph, source);
    search(graph, source, None)
}

/// Find a shortest path from `source` to `target`.
///
/// Returns `None` if `target` is unreachable.
///
/// # Panics
///
/// Panics if either vertex is not in `graph`.
pub fn shortest_path(
    graph: &DirectedWeightedGraph,
    source: VertexId,
    target: VertexId,
) -> Option<RouteInfo> {
    assert_vertex(graph, source);
    assert_vertex(graph, target);
    if source == target {
        return Some(RouteInfo::empty());
    }
    search(graph, source, Some(target)).route_to(graph, target)
}

fn assert_vertex(graph: &DirectedWeightedGraph, vertex: VertexId) {
    assert!(
        vertex < graph.vertex_count(),
        "vertex {vertex} outside vertex range 0..{}",
        graph.vertex_count()
    );
}

/// Shortest-path engine owning a finished graph.
#[derive(Debug)]
pub struct ShortestPaths {
    graph: DirectedWeightedGraph,
    cache: Option<TreeCache>,
}

impl ShortestPaths {
    /// Take ownership of `graph` and prepare it for queries.
    ///
    /// A `max_capacity` of zero in `cache_config` disables tree caching;
    /// every query then runs its own early-exit search.
    pub fn new(graph: DirectedWeightedGraph, cache_config: &CacheConfig) -> Self {
        let cache = (cache_config.max_capacity > 0).then(|| TreeCache::new(cache_config));
        Self { graph, cache }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Find a shortest path from `source` to `target`.
    ///
    /// Returns `None` if `target` is unreachable. A query from a vertex to
    /// itself is the empty path with weight 0.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not in the graph.
    pub fn build_route(&self, source: VertexId, target: VertexId) -> Option<RouteInfo> {
        let Some(cache) = &self.cache else {
            return shortest_path(&self.graph, source, target);
        };

        assert_vertex(&self.graph, target);
        if source == target {
            return Some(RouteInfo::empty());
        }

        let tree = cache.get_or_build(source, || {
            trace!(source, "Building shortest-path tree");
            Arc::new(shortest_path_tree(&self.graph, source))
        });
        tree.route_to(&self.graph, target)
    }

    /// Number of cached trees (approximate, see [`TreeCache::entry_count`]).
    pub fn cached_trees(&self) -> u64 {
        self.cache.as_ref().map_or(0, TreeCache::entry_count)
    }
}
