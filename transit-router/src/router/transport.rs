//! Route graph construction and route queries.
//!
//! Each stop becomes two vertices. `wait_start` is where a traveller
//! arrives; the stop's single wait edge leads to `wait_end`, where buses
//! are boarded. Ride edges run from a `wait_end` to a downstream
//! `wait_start`, one for every pair of stops along a bus's direction of
//! travel, so any path starting at a `wait_start` begins with a wait and
//! then alternates wait, ride, wait, ride.

use std::collections::HashMap;

use tracing::{debug, info};

use super::itinerary::{Itinerary, Segment};
use super::settings::{ConfigError, RoutingSettings};
use crate::cache::CacheConfig;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, StopId};
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, ShortestPaths, VertexId};

/// The two graph vertices of one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRange {
    /// Arrived at the stop, not yet waited.
    pub wait_start: VertexId,
    /// Done waiting, ready to board.
    pub wait_end: VertexId,
}

/// Waiting at a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopEdge {
    pub stop_name: String,
    pub wait_time: f64,
}

/// Riding one bus across `span_count` hops.
#[derive(Debug, Clone, PartialEq)]
pub struct BusEdge {
    pub bus_name: String,
    pub span_count: usize,
    pub travel_time: f64,
}

/// What a graph edge stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeInfo {
    Stop(StopEdge),
    Bus(BusEdge),
}

impl From<&EdgeInfo> for Segment {
    fn from(info: &EdgeInfo) -> Self {
        match info {
            EdgeInfo::Stop(edge) => Segment::Wait {
                stop_name: edge.stop_name.clone(),
                minutes: edge.wait_time,
            },
            EdgeInfo::Bus(edge) => Segment::Ride {
                bus_name: edge.bus_name.clone(),
                span_count: edge.span_count,
                minutes: edge.travel_time,
            },
        }
    }
}

/// Answers "fastest route from stop X to stop Y" over a built catalogue.
///
/// The router copies what it needs out of the catalogue, so later changes
/// to the catalogue are not seen; build a new router instead.
#[derive(Debug)]
pub struct TransportRouter {
    settings: RoutingSettings,
    stop_index: HashMap<String, StopId>,
    /// Indexed by `StopId`.
    wait_ranges: Vec<WaitRange>,
    /// Indexed by `EdgeId`.
    edge_info: Vec<EdgeInfo>,
    engine: ShortestPaths,
}

impl TransportRouter {
    /// Build a router with the default tree cache.
    pub fn build(
        catalogue: &TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, ConfigError> {
        Self::build_with_cache(catalogue, settings, &CacheConfig::default())
    }

    /// Build a router with an explicit tree cache configuration.
    pub fn build_with_cache(
        catalogue: &TransportCatalogue,
        settings: RoutingSettings,
        cache_config: &CacheConfig,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut builder = GraphBuilder::new(catalogue, settings);
        builder.add_stop_edges()?;
        for (_, bus) in catalogue.buses() {
            builder.add_bus_edges(bus)?;
        }

        let GraphBuilder {
            graph,
            stop_index,
            wait_ranges,
            edge_info,
            ..
        } = builder;

        info!(
            stops = catalogue.stop_count(),
            buses = catalogue.bus_count(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built transport router"
        );

        Ok(Self {
            settings,
            stop_index,
            wait_ranges,
            edge_info,
            engine: ShortestPaths::new(graph, cache_config),
        })
    }

    /// Find the fastest route between two stops, by name.
    ///
    /// Returns `None` if either stop is unknown or the destination cannot be
    /// reached.
    pub fn query(&self, from: &str, to: &str) -> Option<Itinerary> {
        let (Some(source), Some(target)) = (self.wait_range(from), self.wait_range(to)) else {
            debug!(from, to, "Route query for unknown stop");
            return None;
        };

        let Some(route) = self
            .engine
            .build_route(source.wait_start, target.wait_start)
        else {
            debug!(from, to, "No route");
            return None;
        };

        let segments: Vec<Segment> = route
            .edges
            .iter()
            .map(|&id| Segment::from(self.edge_info(id)))
            .collect();

        debug!(
            from,
            to,
            total_minutes = route.weight,
            segments = segments.len(),
            "Route found"
        );

        Some(Itinerary {
            total_minutes: route.weight,
            segments,
        })
    }

    /// The vertex pair of the named stop.
    pub fn wait_range(&self, stop_name: &str) -> Option<WaitRange> {
        self.stop_index
            .get(stop_name)
            .map(|id| self.wait_ranges[id.index()])
    }

    /// What the given edge stands for.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an edge of this router's graph.
    pub fn edge_info(&self, id: EdgeId) -> &EdgeInfo {
        &self.edge_info[id]
    }

    /// The settings the router was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// The route graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        self.engine.graph()
    }
}

/// Accumulates the route graph and its edge metadata during a build.
struct GraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    stop_index: HashMap<String, StopId>,
    wait_ranges: Vec<WaitRange>,
    edge_info: Vec<EdgeInfo>,
    /// Sum of all edge weights; bounds the weight of any path.
    total_weight: f64,
}

impl<'a> GraphBuilder<'a> {
    /// Assign vertex pairs in catalogue stop order: stop `i` gets `2i` and `2i + 1`.
    fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        let mut stop_index = HashMap::with_capacity(catalogue.stop_count());
        let mut wait_ranges = Vec::with_capacity(catalogue.stop_count());

        for (id, stop) in catalogue.stops() {
            stop_index.insert(stop.name.clone(), id);
            wait_ranges.push(WaitRange {
                wait_start: 2 * id.index(),
                wait_end: 2 * id.index() + 1,
            });
        }

        Self {
            catalogue,
            settings,
            graph: DirectedWeightedGraph::new(2 * catalogue.stop_count()),
            stop_index,
            wait_ranges,
            edge_info: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Every path weight must stay finite, or search would report reachable
    /// stops as unreachable.
    fn push_edge(&mut self, edge: Edge, info: EdgeInfo) -> Result<(), ConfigError> {
        let total_weight = self.total_weight + edge.weight;
        if !edge.weight.is_finite() || !total_weight.is_finite() {
            return Err(ConfigError::TravelTimeOverflow {
                wait: self.settings.bus_wait_time,
                velocity: self.settings.bus_velocity,
            });
        }
        self.total_weight = total_weight;

        let id = self.graph.add_edge(edge);
        debug_assert_eq!(id, self.edge_info.len(), "edge ids must be dense");
        self.edge_info.push(info);
        Ok(())
    }

    /// One wait edge per stop.
    fn add_stop_edges(&mut self) -> Result<(), ConfigError> {
        let wait_time = self.settings.bus_wait_time;
        for (id, stop) in self.catalogue.stops() {
            let range = self.wait_ranges[id.index()];
            self.push_edge(
                Edge::new(range.wait_start, range.wait_end, wait_time),
                EdgeInfo::Stop(StopEdge {
                    stop_name: stop.name.clone(),
                    wait_time,
                }),
            )?;
        }
        Ok(())
    }

    /// Ride edges from every stop to every later stop, in each direction the
    /// bus runs.
    fn add_bus_edges(&mut self, bus: &Bus) -> Result<(), ConfigError> {
        for stops in bus.directions() {
            for (i, &board) in stops.iter().enumerate() {
                let mut meters: u64 = 0;
                for j in (i + 1)..stops.len() {
                    meters += u64::from(self.catalogue.distance(stops[j - 1], stops[j]));
                    let span_count = j - i;
                    let travel_time = self.settings.ride_minutes(meters);

                    let from = self.wait_ranges[board.index()].wait_end;
                    let to = self.wait_ranges[stops[j].index()].wait_start;
                    self.push_edge(
                        Edge::new(from, to, travel_time),
                        EdgeInfo::Bus(BusEdge {
                            bus_name: bus.name.clone(),
                            span_count,
                            travel_time,
                        }),
                    )?;
                }
            }
        }
        Ok(())
    }
}
