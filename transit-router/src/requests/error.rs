//! Request processing error types.

use crate::domain::CatalogueError;
use crate::router::ConfigError;

/// Errors that can occur while loading a request document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The network definition is inconsistent
    #[error("invalid network: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing settings are unusable
    #[error("invalid routing settings: {0}")]
    Config(#[from] ConfigError),

    /// The document has no `routing_settings` section
    #[error("routing_settings are missing")]
    MissingRoutingSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RequestError::from(CatalogueError::UnknownStop("Z".into()));
        assert_eq!(err.to_string(), "invalid network: unknown stop: Z");

        let err = RequestError::from(ConfigError::NonPositiveVelocity(0.0));
        assert_eq!(
            err.to_string(),
            "invalid routing settings: bus velocity must be positive, got 0 km/h"
        );

        let err = RequestError::MissingRoutingSettings;
        assert_eq!(err.to_string(), "routing_settings are missing");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RequestError::from(json_err);
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
