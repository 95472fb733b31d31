//! Stop types.

use std::fmt;

use super::{BusId, Coordinates};

/// Handle of a stop inside a [`TransportCatalogue`](crate::catalogue::TransportCatalogue).
///
/// Stop ids are dense and assigned in insertion order, so they double as
/// indexes into per-stop tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the id as an index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// A named physical stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coords: Coordinates,
    /// Buses calling here, in the order they were added. May repeat a bus
    /// that visits the stop more than once.
    pub buses: Vec<BusId>,
}

impl Stop {
    /// Create a stop with no buses yet.
    pub fn new(name: impl Into<String>, coords: Coordinates) -> Self {
        Self {
            name: name.into(),
            coords,
            buses: Vec::new(),
        }
    }

    /// Returns true if at least one bus calls at this stop.
    pub fn is_served(&self) -> bool {
        !self.buses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stop_is_unserved() {
        let stop = Stop::new("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829));
        assert_eq!(stop.name, "Tolstopaltsevo");
        assert!(!stop.is_served());
    }

    #[test]
    fn display_id() {
        assert_eq!(StopId(4).to_string(), "stop#4");
        assert_eq!(StopId(4).index(), 4);
    }
}
