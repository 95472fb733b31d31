//! Domain types for the transit network.
//!
//! Stops and buses live in arenas owned by the catalogue and refer to each
//! other through [`StopId`] and [`BusId`] handles rather than references.

mod bus;
mod error;
pub mod geo;
mod stop;

pub use bus::{Bus, BusId};
pub use error::CatalogueError;
pub use geo::Coordinates;
pub use stop::{Stop, StopId};
