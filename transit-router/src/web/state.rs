//! Application state for the web layer.

use std::sync::Arc;

use crate::requests::RequestHandler;

/// Shared application state.
///
/// The network is loaded once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded catalogue and router
    pub network: Arc<RequestHandler>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RequestHandler) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
