//! Bus and stop statistics.

use std::collections::{BTreeSet, HashSet};

use crate::domain::geo;

use super::TransportCatalogue;

/// Summary of one bus line over a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStats {
    /// Stops called at over a full run, counting repeats.
    pub stop_count: usize,
    /// Distinct stops on the line.
    pub unique_stop_count: usize,
    /// Road length of a full run in meters.
    pub route_length: u64,
    /// Road length divided by great-circle length.
    pub curvature: f64,
}

/// The buses serving one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopStats {
    /// Bus names, sorted and without duplicates.
    pub buses: Vec<String>,
}

impl TransportCatalogue {
    /// Statistics for the named bus, or `None` if it is unknown.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.find_bus(name)?;
        let route = bus.full_route();

        let unique_stop_count = route.iter().collect::<HashSet<_>>().len();

        let route_length: u64 = route
            .windows(2)
            .map(|pair| u64::from(self.distance(pair[0], pair[1])))
            .sum();

        let geo_length: f64 = route
            .windows(2)
            .map(|pair| {
                geo::distance_between(self.stop(pair[0]).coords, self.stop(pair[1]).coords)
            })
            .sum();

        // A line whose stops all share one location has no geographic length
        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            1.0
        };

        Some(BusStats {
            stop_count: route.len(),
            unique_stop_count,
            route_length,
            curvature,
        })
    }

    /// Buses serving the named stop, or `None` if the stop is unknown.
    pub fn stop_stats(&self, name: &str) -> Option<StopStats> {
        let stop = self.find_stop(name)?;
        let buses: BTreeSet<&str> = stop
            .buses
            .iter()
            .map(|&id| self.bus(id).name.as_str())
            .collect();

        Some(StopStats {
            buses: buses.into_iter().map(str::to_string).collect(),
        })
    }
}
