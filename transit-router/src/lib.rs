//! Transit route planner.
//!
//! Loads a bus network (stops, road distances, bus routes), answers
//! statistics about it, and finds the fastest itinerary between two
//! stops, counting a fixed wait at every boarding.

pub mod cache;
pub mod catalogue;
pub mod config;
pub mod domain;
pub mod graph;
pub mod requests;
pub mod router;
pub mod web;
