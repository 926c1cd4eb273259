//! Routing settings.

use serde::{Deserialize, Serialize};

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Error returned for out-of-range routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Wait time must be finite and non-negative
    #[error("invalid bus wait time: {0} minutes")]
    InvalidWaitTime(f64),

    /// Velocity must be finite and positive
    #[error("invalid bus velocity: {0} km/h")]
    InvalidVelocity(f64),
}

/// Parameters of graph compilation.
///
/// Immutable once built; changing them means compiling a new router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoutingSettings")]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before boarding.
    bus_wait_time: f64,

    /// Bus speed in km/h.
    bus_velocity: f64,
}

#[derive(Deserialize)]
struct RawRoutingSettings {
    bus_wait_time: f64,
    bus_velocity: f64,
}

impl TryFrom<RawRoutingSettings> for RoutingSettings {
    type Error = SettingsError;

    fn try_from(raw: RawRoutingSettings) -> Result<Self, Self::Error> {
        RoutingSettings::new(raw.bus_wait_time, raw.bus_velocity)
    }
}

impl RoutingSettings {
    /// Create settings from a wait time in minutes and a velocity in km/h.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Result<Self, SettingsError> {
        if !bus_wait_time.is_finite() || bus_wait_time < 0.0 {
            return Err(SettingsError::InvalidWaitTime(bus_wait_time));
        }
        if !bus_velocity.is_finite() || bus_velocity <= 0.0 {
            return Err(SettingsError::InvalidVelocity(bus_velocity));
        }
        Ok(Self {
            bus_wait_time,
            bus_velocity,
        })
    }

    /// Wait time in minutes.
    pub fn bus_wait_time(&self) -> f64 {
        self.bus_wait_time
    }

    /// Velocity in km/h.
    pub fn bus_velocity(&self) -> f64 {
        self.bus_velocity
    }

    /// Minutes needed to ride `meters` at the configured velocity.
    pub fn travel_time(&self, meters: f64) -> f64 {
        meters / METERS_PER_KM / self.bus_velocity * MINUTES_PER_HOUR
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
        assert_eq!(settings.bus_wait_time(), 6.0);
        assert_eq!(settings.bus_velocity(), 40.0);
    }

    #[test]
    fn travel_time_in_minutes() {
        let settings = RoutingSettings::new(6.0, 60.0).unwrap();
        assert!((settings.travel_time(1000.0) - 1.0).abs() < 1e-12);

        let settings = RoutingSettings::new(0.0, 40.0).unwrap();
        assert!((settings.travel_time(2000.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            RoutingSettings::new(-1.0, 40.0),
            Err(SettingsError::InvalidWaitTime(-1.0))
        );
        assert_eq!(
            RoutingSettings::new(6.0, 0.0),
            Err(SettingsError::InvalidVelocity(0.0))
        );
        assert!(RoutingSettings::new(f64::NAN, 40.0).is_err());
        assert!(RoutingSettings::new(6.0, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RoutingSettings::new(0.0, 30.0).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 2, "bus_velocity": 30}"#).unwrap();
        assert_eq!(settings, RoutingSettings::new(2.0, 30.0).unwrap());

        let bad = serde_json::from_str::<RoutingSettings>(r#"{"bus_wait_time": 2, "bus_velocity": -3}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn serialize_roundtrip() {
        let settings = RoutingSettings::new(3.5, 25.0).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let back: RoutingSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            SettingsError::InvalidWaitTime(-2.0).to_string(),
            "invalid bus wait time: -2 minutes"
        );
        assert_eq!(
            SettingsError::InvalidVelocity(0.0).to_string(),
            "invalid bus velocity: 0 km/h"
        );
    }
}
