//! Weighted directed graphs and shortest paths over them.
//!
//! Nothing in this module knows about stops or buses; the transport router
//! maps its domain onto plain vertex and edge ids.

mod digraph;
mod dijkstra;

pub use digraph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use dijkstra::{RouteInfo, ShortestPathTree, ShortestPaths, shortest_path, shortest_path_tree};
