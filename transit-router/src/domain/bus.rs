//! Bus line types.

use std::fmt;

use super::StopId;

/// Handle of a bus inside a [`TransportCatalogue`](crate::catalogue::TransportCatalogue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl BusId {
    /// Returns the id as an index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus#{}", self.0)
    }
}

/// A named bus line.
///
/// `stops` holds the stops as declared. For a roundtrip (loop) bus the
/// last stop equals the first and the sequence is travelled once. Any
/// other bus runs out and back: forward through `stops`, then back
/// through them in reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Create a new bus.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// The directions the bus runs in, each as an ordered stop sequence.
    ///
    /// A loop yields one sequence; an out-and-back line yields the forward
    /// sequence followed by the reversed one.
    pub fn directions(&self) -> Vec<Vec<StopId>> {
        let forward = self.stops.clone();
        if self.is_roundtrip {
            return vec![forward];
        }
        let backward = self.stops.iter().rev().copied().collect();
        vec![forward, backward]
    }

    /// Every stop the bus calls at over one full run, in order.
    ///
    /// For `[A, B, C]` out and back this is `[A, B, C, B, A]`.
    pub fn full_route(&self) -> Vec<StopId> {
        let mut route = self.stops.clone();
        if !self.is_roundtrip && self.stops.len() > 1 {
            route.extend(self.stops.iter().rev().skip(1));
        }
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<StopId> {
        raw.iter().map(|&i| StopId(i)).collect()
    }

    #[test]
    fn roundtrip_has_one_direction() {
        let bus = Bus::new("256", ids(&[0, 1, 2, 0]), true);
        assert_eq!(bus.directions(), vec![ids(&[0, 1, 2, 0])]);
        assert_eq!(bus.full_route(), ids(&[0, 1, 2, 0]));
    }

    #[test]
    fn out_and_back_has_two_directions() {
        let bus = Bus::new("750", ids(&[0, 1, 2]), false);
        assert_eq!(bus.directions(), vec![ids(&[0, 1, 2]), ids(&[2, 1, 0])]);
    }

    #[test]
    fn out_and_back_full_route() {
        let bus = Bus::new("750", ids(&[0, 1, 2]), false);
        assert_eq!(bus.full_route(), ids(&[0, 1, 2, 1, 0]));
    }

    #[test]
    fn single_stop_line() {
        let bus = Bus::new("1", ids(&[3]), false);
        assert_eq!(bus.full_route(), ids(&[3]));
        assert_eq!(bus.directions().len(), 2);
    }
}
