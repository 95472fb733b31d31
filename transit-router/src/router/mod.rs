//! Fastest-route queries over a transport catalogue.
//!
//! The router turns stops and buses into a weighted directed graph where
//! edge weights are minutes, then answers point-to-point queries with
//! Dijkstra and translates the resulting edge path back into waits and rides.

mod itinerary;
mod settings;
mod transport;


pub use itinerary::{Itinerary, Segment};
pub use settings::{ConfigError, RoutingSettings};
pub use transport::{BusEdge, EdgeInfo, StopEdge, TransportRouter, WaitRange};
