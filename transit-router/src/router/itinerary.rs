//! Itinerary types.
//!
//! An `Itinerary` is the answer to a route query: the total travel time and
//! the waits and rides that make it up, in the order they happen.

use serde::Serialize;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Segment {
    /// Waiting at a stop for a bus to arrive
    #[serde(rename = "Wait")]
    Wait {
        stop_name: String,
        #[serde(rename = "time")]
        minutes: f64,
    },
    /// Riding a bus across `span_count` consecutive stop-to-stop hops
    #[serde(rename = "Bus")]
    Ride {
        #[serde(rename = "bus")]
        bus_name: String,
        span_count: usize,
        #[serde(rename = "time")]
        minutes: f64,
    },
}

impl Segment {
    /// Returns the duration of this segment in minutes.
    pub fn minutes(&self) -> f64 {
        match self {
            Segment::Wait { minutes, .. } | Segment::Ride { minutes, .. } => *minutes,
        }
    }

    /// Returns true if this is a wait.
    pub fn is_wait(&self) -> bool {
        matches!(self, Segment::Wait { .. })
    }

    /// Returns true if this is a ride.
    pub fn is_ride(&self) -> bool {
        matches!(self, Segment::Ride { .. })
    }
}

/// The fastest way from one stop to another.
///
/// # Invariants
///
/// - Segments alternate Wait, Ride, Wait, Ride, ... starting with a Wait
///   (or are empty when origin and destination coincide)
/// - `total_minutes` is the sum of the segment durations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    #[serde(rename = "total_time")]
    pub total_minutes: f64,
    #[serde(rename = "items")]
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_ride()).count()
    }

    /// Returns true if no travel is needed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
