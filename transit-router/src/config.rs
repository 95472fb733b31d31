//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;

/// Address the server binds to when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors that can occur while reading the server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServerConfigError {
    /// No network document was named
    #[error("NETWORK_FILE is not set")]
    MissingNetworkFile,

    /// The bind address does not parse
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),

    /// The cache capacity is not a number
    #[error("invalid CACHE_CAPACITY: {0}")]
    InvalidCacheCapacity(String),
}

/// Configuration of the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON document holding the network and routing settings.
    pub network_file: PathBuf,

    /// Socket address to listen on.
    pub bind_addr: SocketAddr,

    /// Shortest-path tree cache.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read `NETWORK_FILE`, `BIND_ADDR` and `CACHE_CAPACITY`.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ServerConfigError> {
        let network_file = lookup("NETWORK_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or(ServerConfigError::MissingNetworkFile)?;

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ServerConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let cache = match lookup("CACHE_CAPACITY") {
            Some(raw) => CacheConfig {
                max_capacity: raw
                    .parse()
                    .map_err(|_| ServerConfigError::InvalidCacheCapacity(raw.clone()))?,
            },
            None => CacheConfig::default(),
        };

        Ok(Self {
            network_file,
            bind_addr,
            cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("NETWORK_FILE", "net.json")])).unwrap();
        assert_eq!(config.network_file, PathBuf::from("net.json"));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("NETWORK_FILE", "net.json"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("CACHE_CAPACITY", "0"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.cache.max_capacity, 0);
    }

    #[test]
    fn missing_network_file() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ServerConfigError::MissingNetworkFile);

        let err = ServerConfig::from_lookup(lookup(&[("NETWORK_FILE", "")])).unwrap_err();
        assert_eq!(err, ServerConfigError::MissingNetworkFile);
    }

    #[test]
    fn bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("NETWORK_FILE", "net.json"),
            ("BIND_ADDR", "localhost"),
        ]))
        .unwrap_err();
        assert_eq!(err, ServerConfigError::InvalidBindAddr("localhost".into()));

        let err = ServerConfig::from_lookup(lookup(&[
            ("NETWORK_FILE", "net.json"),
            ("CACHE_CAPACITY", "lots"),
        ]))
        .unwrap_err();
        assert_eq!(err, ServerConfigError::InvalidCacheCapacity("lots".into()));
    }
}
