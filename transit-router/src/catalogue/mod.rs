//! The transport catalogue: stops, buses and road distances.
//!
//! The catalogue is populated once, in order: every stop, then every road
//! distance, then every bus (buses refer to stops by name, so the stops must
//! already be known). After loading it is only read.

mod stats;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Bus, BusId, CatalogueError, Coordinates, Stop, StopId};

pub use stats::{BusStats, StopStats};

/// Stops, buses and road distances of one transit network.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,

    buses: Vec<Bus>,
    bus_index: HashMap<String, BusId>,

    /// Road distance in meters, keyed by directed (from, to) pair.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. Names are unique.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coords: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if !coords.is_valid() {
            return Err(CatalogueError::InvalidCoordinates(name));
        }
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coords));
        Ok(id)
    }

    /// Record the road distance from one stop to another.
    ///
    /// Only the given direction is stored; [`distance`](Self::distance)
    /// falls back to it when the reverse direction is asked for.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), CatalogueError> {
        let from = self.require_stop(from)?;
        let to = self.require_stop(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Add a bus calling at the named stops in order.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyBus(name));
        }

        let stops = stop_names
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusId(self.buses.len());
        for stop in &stops {
            self.stops[stop.index()].buses.push(id);
        }

        debug!(bus = %name, stops = stops.len(), is_roundtrip, "Added bus");

        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus::new(name, stops, is_roundtrip));
        Ok(id)
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }

    /// Look up a stop id by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a bus id by name.
    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    /// Get a stop by id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Get a bus by id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// Find a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    /// Find a bus by name.
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| self.bus(id))
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Road distance in meters from one stop to another.
    ///
    /// Uses the recorded `from → to` value, falling back to `to → from` when
    /// only the reverse was recorded. Returns 0 if neither was.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }
}
