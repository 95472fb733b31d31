//! Caching layer for shortest-path trees.
//!
//! A tree grown from one source answers every later query from that source,
//! so the router keeps recently used trees keyed by source vertex. Trees are
//! immutable once built and shared through `Arc`.

use std::fmt;
use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::graph::{ShortestPathTree, VertexId};

/// Cached tree entry.
type TreeEntry = Arc<ShortestPathTree>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached trees. Zero disables caching.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 256 }
    }
}

/// Concurrent cache of shortest-path trees, keyed by source vertex.
pub struct TreeCache {
    trees: MokaCache<VertexId, TreeEntry>,
}

impl TreeCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let trees = MokaCache::builder().max_capacity(config.max_capacity).build();
        Self { trees }
    }

    /// Get the tree for `source`, building it with `build` on a miss.
    ///
    /// Concurrent misses on the same source build the tree only once.
    pub fn get_or_build(&self, source: VertexId, build: impl FnOnce() -> TreeEntry) -> TreeEntry {
        self.trees.get_with(source, build)
    }

    /// Get a cached tree, if present.
    #[cfg(test)]
    fn get(&self, source: VertexId) -> Option<TreeEntry> {
        self.trees.get(&source)
    }

    /// Number of cached trees.
    ///
    /// Moka applies writes lazily, so the count may trail recent inserts.
    pub fn entry_count(&self) -> u64 {
        self.trees.entry_count()
    }

    /// Invalidate all cached trees.
    #[cfg(test)]
    fn invalidate_all(&self) {
        self.trees.invalidate_all();
    }
}

impl fmt::Debug for TreeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeCache")
            .field("entry_count", &self.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::graph::{DirectedWeightedGraph, Edge, shortest_path_tree};

    fn graph() -> DirectedWeightedGraph {
        let mut graph = DirectedWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 1.0));
        graph.add_edge(Edge::new(1, 2, 1.0));
        graph
    }

    #[test]
    fn builds_once_per_source() {
        let graph = graph();
        let cache = TreeCache::new(&CacheConfig::default());
        let builds = AtomicUsize::new(0);

        for _ in 0..3 {
            let tree = cache.get_or_build(0, || {
                builds.fetch_add(1, Ordering::SeqCst);
                Arc::new(shortest_path_tree(&graph, 0))
            });
            assert_eq!(tree.distance_to(2), Some(2.0));
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(cache.get(0).is_some());
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn invalidate_all_forgets_trees() {
        let graph = graph();
        let cache = TreeCache::new(&CacheConfig::default());
        cache.get_or_build(1, || Arc::new(shortest_path_tree(&graph, 1)));
        assert!(cache.get(1).is_some());

        cache.invalidate_all();
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn default_config() {
        assert_eq!(CacheConfig::default().max_capacity, 256);
    }
}
