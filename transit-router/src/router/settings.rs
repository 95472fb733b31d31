//! Routing configuration.

use serde::{Deserialize, Serialize};

/// Error from invalid routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Bus velocity must be strictly positive
    #[error("bus velocity must be positive, got {0} km/h")]
    NonPositiveVelocity(f64),

    /// Waiting time cannot be negative
    #[error("bus wait time cannot be negative, got {0} min")]
    NegativeWaitTime(f64),

    /// A setting is NaN or infinite
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    /// Travel times grow past what `f64` can hold
    #[error("travel times overflow with bus_wait_time {wait} min and bus_velocity {velocity} km/h")]
    TravelTimeOverflow { wait: f64, velocity: f64 },
}

/// Parameters that turn road distances into travel times.
///
/// Deserialises from the `routing_settings` object of a request document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting for any bus at any stop.
    pub bus_wait_time: f64,

    /// Bus speed in km/h, constant across the network.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check the settings produce finite, non-negative edge weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bus_wait_time.is_finite() {
            return Err(ConfigError::NonFinite("bus_wait_time"));
        }
        if !self.bus_velocity.is_finite() {
            return Err(ConfigError::NonFinite("bus_velocity"));
        }
        if self.bus_velocity <= 0.0 {
            return Err(ConfigError::NonPositiveVelocity(self.bus_velocity));
        }
        if self.bus_wait_time < 0.0 {
            return Err(ConfigError::NegativeWaitTime(self.bus_wait_time));
        }
        Ok(())
    }

    /// Bus speed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes to ride `meters` of road.
    pub fn ride_minutes(&self, meters: u64) -> f64 {
        meters as f64 / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();
        assert_eq!(settings.bus_wait_time, 6.0);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn ride_time() {
        let settings = RoutingSettings::new(5.0, 30.0);
        assert_eq!(settings.meters_per_minute(), 500.0);
        assert_eq!(settings.ride_minutes(2000), 4.0);
        assert_eq!(settings.ride_minutes(0), 0.0);
    }

    #[test]
    fn rejects_zero_and_negative_velocity() {
        assert_eq!(
            RoutingSettings::new(5.0, 0.0).validate(),
            Err(ConfigError::NonPositiveVelocity(0.0))
        );
        assert_eq!(
            RoutingSettings::new(5.0, -10.0).validate(),
            Err(ConfigError::NonPositiveVelocity(-10.0))
        );
    }

    #[test]
    fn rejects_negative_wait() {
        assert_eq!(
            RoutingSettings::new(-1.0, 30.0).validate(),
            Err(ConfigError::NegativeWaitTime(-1.0))
        );
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RoutingSettings::new(0.0, 30.0).validate().is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            RoutingSettings::new(f64::NAN, 30.0).validate(),
            Err(ConfigError::NonFinite("bus_wait_time"))
        );
        assert_eq!(
            RoutingSettings::new(5.0, f64::INFINITY).validate(),
            Err(ConfigError::NonFinite("bus_velocity"))
        );
    }

    #[test]
    fn deserialize_from_document() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 6, "bus_velocity": 40}"#).unwrap();
        assert_eq!(settings, RoutingSettings::new(6.0, 40.0));
    }

    #[test]
    fn error_display() {
        let err = ConfigError::NonPositiveVelocity(0.0);
        assert_eq!(err.to_string(), "bus velocity must be positive, got 0 km/h");

        let err = ConfigError::NegativeWaitTime(-2.5);
        assert_eq!(err.to_string(), "bus wait time cannot be negative, got -2.5 min");

        let err = ConfigError::NonFinite("bus_velocity");
        assert_eq!(err.to_string(), "bus_velocity must be a finite number");

        let err = ConfigError::TravelTimeOverflow {
            wait: 5.0,
            velocity: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "travel times overflow with bus_wait_time 5 min and bus_velocity 0.5 km/h"
        );
    }
}
