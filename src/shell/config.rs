// Application configuration read from environment variables, with defaults.
//
// Variables
// - CINEMA_HOST, CINEMA_PORT: listen address (default 0.0.0.0:8080)
// - CINEMA_SEARCH_RADIUS_METERS: default proximity radius (default 100000)
// - CINEMA_LOCATION_TIMEOUT_MS: bound on location lookups (default 5000)
// - CINEMA_LATITUDE, CINEMA_LONGITUDE: position reported by the location provider; unset means denied
// - CINEMA_SEED_FILE: optional JSON catalogue to load at startup

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::core::geography::Coordinate;

pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub search_radius_meters: f64,
    pub location_timeout: Duration,
    pub home_position: Option<Coordinate>,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|value| value.trim().parse::<f64>().ok());

        let home_position = match (parsed("CINEMA_LATITUDE"), parsed("CINEMA_LONGITUDE")) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        };

        Self {
            host: lookup("CINEMA_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("CINEMA_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            search_radius_meters: parsed("CINEMA_SEARCH_RADIUS_METERS")
                .filter(|radius| radius.is_finite() && *radius >= 0.0)
                .unwrap_or(DEFAULT_SEARCH_RADIUS_METERS),
            location_timeout: Duration::from_millis(
                lookup("CINEMA_LOCATION_TIMEOUT_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5_000),
            ),
            home_position,
            seed_file: lookup("CINEMA_SEED_FILE").map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.search_radius_meters, DEFAULT_SEARCH_RADIUS_METERS);
        assert_eq!(config.location_timeout, Duration::from_millis(5_000));
        assert_eq!(config.home_position, None);
        assert_eq!(config.seed_file, None);
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CINEMA_HOST", "127.0.0.1"),
            ("CINEMA_PORT", "9000"),
            ("CINEMA_SEARCH_RADIUS_METERS", "25000"),
            ("CINEMA_LOCATION_TIMEOUT_MS", "250"),
            ("CINEMA_LATITUDE", "59.3293"),
            ("CINEMA_LONGITUDE", "18.0686"),
            ("CINEMA_SEED_FILE", "seed/catalogue.json"),
        ]));

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.search_radius_meters, 25_000.0);
        assert_eq!(config.location_timeout, Duration::from_millis(250));
        assert_eq!(config.home_position, Some(Coordinate::new(59.3293, 18.0686)));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed/catalogue.json")));
    }

    #[rstest]
    #[case(&[("CINEMA_LATITUDE", "59.3")])]
    #[case(&[("CINEMA_LATITUDE", "59.3"), ("CINEMA_LONGITUDE", "east")])]
    fn it_should_leave_the_position_unset_when_incomplete(#[case] pairs: &[(&str, &str)]) {
        let config = AppConfig::from_lookup(lookup_from(pairs));
        assert_eq!(config.home_position, None);
    }

    #[rstest]
    #[case("-5")]
    #[case("NaN")]
    #[case("far")]
    fn it_should_ignore_an_invalid_radius(#[case] radius: &str) {
        let config =
            AppConfig::from_lookup(lookup_from(&[("CINEMA_SEARCH_RADIUS_METERS", radius)]));
        assert_eq!(config.search_radius_meters, DEFAULT_SEARCH_RADIUS_METERS);
    }
}
