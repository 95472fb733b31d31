//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalogue::{BusStats, StopStats};

/// Query string of a route request.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Statistics for one bus.
#[derive(Debug, PartialEq, Serialize)]
pub struct BusResult {
    /// Bus name
    pub name: String,

    /// Stops called at over a full run
    pub stop_count: usize,

    /// Distinct stops
    pub unique_stop_count: usize,

    /// Road length of a full run in meters
    pub route_length: u64,

    /// Road length over great-circle length
    pub curvature: f64,
}

/// Buses serving one stop.
#[derive(Debug, PartialEq, Serialize)]
pub struct StopResult {
    /// Stop name
    pub name: String,

    /// Bus names, sorted
    pub buses: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl BusResult {
    /// Create from catalogue statistics.
    pub fn from_stats(name: &str, stats: BusStats) -> Self {
        Self {
            name: name.to_string(),
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            route_length: stats.route_length,
            curvature: stats.curvature,
        }
    }
}

impl StopResult {
    /// Create from catalogue statistics.
    pub fn from_stats(name: &str, stats: StopStats) -> Self {
        Self {
            name: name.to_string(),
            buses: stats.buses,
        }
    }
}
