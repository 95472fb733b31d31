//! Web layer for the transit router.
//!
//! Provides HTTP endpoints for route queries and network statistics.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
