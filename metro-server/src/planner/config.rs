//! Fare and timing configuration for route estimates.

use std::str::FromStr;

use chrono::Duration;

/// Environment variable for the per-station travel time.
pub const MINS_PER_STATION_VAR: &str = "METRO_MINS_PER_STATION";

/// Environment variable for the per-interchange time.
pub const MINS_PER_INTERCHANGE_VAR: &str = "METRO_MINS_PER_INTERCHANGE";

/// Environment variable for the per-station fare.
pub const FARE_PER_STATION_VAR: &str = "METRO_FARE_PER_STATION";

/// Error from invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A setting could not be parsed
    #[error("{key}: cannot parse {value:?}")]
    Unparseable { key: String, value: String },

    /// A time setting was negative
    #[error("{key}: must not be negative, got {value}")]
    Negative { key: &'static str, value: i64 },

    /// A time setting does not fit in a duration
    #[error("{key}: {value} minutes is out of range")]
    OutOfRange { key: &'static str, value: i64 },
}

/// Constants for travel time and fare estimates.
///
/// Times are non-negative and representable as durations; this is checked
/// by [`FareConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareConfig {
    per_station: Duration,
    per_interchange: Duration,
    fare_per_station: u32,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        mins_per_station: i64,
        mins_per_interchange: i64,
        fare_per_station: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            per_station: minutes("mins_per_station", mins_per_station)?,
            per_interchange: minutes("mins_per_interchange", mins_per_interchange)?,
            fare_per_station,
        })
    }

    /// Build a configuration from a key lookup, using the defaults for
    /// unset keys.
    ///
    /// Set but unparseable or out-of-range values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self::new(
            read_setting(&lookup, MINS_PER_STATION_VAR, defaults.mins_per_station())?,
            read_setting(
                &lookup,
                MINS_PER_INTERCHANGE_VAR,
                defaults.mins_per_interchange(),
            )?,
            read_setting(&lookup, FARE_PER_STATION_VAR, defaults.fare_per_station())?,
        )
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Travel time between adjacent stations.
    pub fn per_station(&self) -> Duration {
        self.per_station
    }

    /// Extra time for changing lines.
    pub fn per_interchange(&self) -> Duration {
        self.per_interchange
    }

    /// Travel time between adjacent stations (minutes).
    pub fn mins_per_station(&self) -> i64 {
        self.per_station.num_minutes()
    }

    /// Extra time for changing lines (minutes).
    pub fn mins_per_interchange(&self) -> i64 {
        self.per_interchange.num_minutes()
    }

    /// Fare charged per station travelled.
    pub fn fare_per_station(&self) -> u32 {
        self.fare_per_station
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            per_station: Duration::minutes(2),
            per_interchange: Duration::minutes(5),
            fare_per_station: 5,
        }
    }
}

fn minutes(key: &'static str, value: i64) -> Result<Duration, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { key, value });
    }
    Duration::try_minutes(value).ok_or(ConfigError::OutOfRange { key, value })
}

/// Read and parse a setting, falling back to `default` when it is unset.
pub fn read_setting<T, F>(lookup: F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Unparseable {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = FareConfig::default();

        assert_eq!(config.mins_per_station(), 2);
        assert_eq!(config.mins_per_interchange(), 5);
        assert_eq!(config.fare_per_station(), 5);
    }

    #[test]
    fn duration_methods() {
        let config = FareConfig::default();

        assert_eq!(config.per_station(), Duration::minutes(2));
        assert_eq!(config.per_interchange(), Duration::minutes(5));
    }

    #[test]
    fn custom_config() {
        let config = FareConfig::new(3, 7, 10).unwrap();

        assert_eq!(config.mins_per_station(), 3);
        assert_eq!(config.mins_per_interchange(), 7);
        assert_eq!(config.fare_per_station(), 10);
    }

    #[test]
    fn zero_times_allowed() {
        let config = FareConfig::new(0, 0, 0).unwrap();
        assert_eq!(config.per_station(), Duration::zero());
    }

    #[test]
    fn rejects_negative_station_time() {
        assert_eq!(
            FareConfig::new(-2, 5, 5),
            Err(ConfigError::Negative {
                key: "mins_per_station",
                value: -2,
            })
        );
    }

    #[test]
    fn rejects_negative_interchange_time() {
        assert_eq!(
            FareConfig::new(2, -5, 5),
            Err(ConfigError::Negative {
                key: "mins_per_interchange",
                value: -5,
            })
        );
    }

    #[test]
    fn rejects_unrepresentable_station_time() {
        assert_eq!(
            FareConfig::new(i64::MAX, 5, 5),
            Err(ConfigError::OutOfRange {
                key: "mins_per_station",
                value: i64::MAX,
            })
        );
    }

    #[test]
    fn rejects_unrepresentable_interchange_time() {
        assert_eq!(
            FareConfig::new(2, i64::MAX, 5),
            Err(ConfigError::OutOfRange {
                key: "mins_per_interchange",
                value: i64::MAX,
            })
        );
    }

    #[test]
    fn lookup_uses_defaults_when_unset() {
        let config = FareConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, FareConfig::default());
    }

    #[test]
    fn lookup_overrides_set_values() {
        let config = FareConfig::from_lookup(lookup_from(&[
            (MINS_PER_STATION_VAR, "3"),
            (FARE_PER_STATION_VAR, "12"),
        ]))
        .unwrap();

        assert_eq!(config.mins_per_station(), 3);
        assert_eq!(config.mins_per_interchange(), 5);
        assert_eq!(config.fare_per_station(), 12);
    }

    #[test]
    fn lookup_rejects_unparseable_value() {
        let err = FareConfig::from_lookup(lookup_from(&[(MINS_PER_INTERCHANGE_VAR, "five")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Unparseable {
                key: MINS_PER_INTERCHANGE_VAR.to_string(),
                value: "five".to_string(),
            }
        );
    }

    #[test]
    fn lookup_rejects_out_of_range_value() {
        let err = FareConfig::from_lookup(lookup_from(&[(
            MINS_PER_STATION_VAR,
            "9223372036854775807",
        )]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn lookup_rejects_negative_fare() {
        let err =
            FareConfig::from_lookup(lookup_from(&[(FARE_PER_STATION_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Unparseable { .. }));
    }

    #[test]
    fn read_setting_fallback_and_parse() {
        let lookup = lookup_from(&[("PORT", "8080"), ("BAD", "x")]);

        assert_eq!(read_setting(&lookup, "PORT", 3000u16), Ok(8080));
        assert_eq!(read_setting(&lookup, "UNSET", 3000u16), Ok(3000));
        assert!(read_setting(&lookup, "BAD", 3000u16).is_err());
    }

    #[test]
    fn error_display() {
        let err = ConfigError::Negative {
            key: "mins_per_station",
            value: -2,
        };
        assert_eq!(err.to_string(), "mins_per_station: must not be negative, got -2");

        let err = ConfigError::Unparseable {
            key: "METRO_ADDR".to_string(),
            value: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "METRO_ADDR: cannot parse \"nope\"");
    }
}
