//! Environment configuration

use std::env;
use toolbelt_units::{MAX_PLACES, UNIT_PLACES};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Decimal places in unit conversion display text
    pub display_places: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            display_places: UNIT_PLACES,
        }
    }
}

impl ServerConfig {
    /// Read `TOOLBELT_LOG` (falling back to `RUST_LOG`) and `TOOLBELT_DISPLAY_PLACES`.
    ///
    /// Returns warnings for rejected values; logging is not up yet when this runs.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();
        let mut warnings = Vec::new();

        if let Some(filter) = lookup("TOOLBELT_LOG").or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        if let Some(raw) = lookup("TOOLBELT_DISPLAY_PLACES") {
            match raw.trim().parse::<usize>() {
                Ok(places) if places <= MAX_PLACES => config.display_places = places,
                _ => warnings.push(format!(
                    "ignoring TOOLBELT_DISPLAY_PLACES={:?}: expected an integer 0-{}, using {}",
                    raw, MAX_PLACES, UNIT_PLACES
                )),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.display_places, 4);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_toolbelt_log_wins_over_rust_log() {
        let (config, _) = ServerConfig::from_lookup(lookup(&[
            ("TOOLBELT_LOG", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.log_filter, "debug");

        let (config, _) = ServerConfig::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_display_places() {
        let (config, warnings) = ServerConfig::from_lookup(lookup(&[("TOOLBELT_DISPLAY_PLACES", "2")]));
        assert_eq!(config.display_places, 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_display_places_falls_back() {
        let too_many = (MAX_PLACES + 1).to_string();
        for raw in ["-1", "abc", too_many.as_str()] {
            let (config, warnings) = ServerConfig::from_lookup(lookup(&[("TOOLBELT_DISPLAY_PLACES", raw)]));
            assert_eq!(config.display_places, UNIT_PLACES);
            assert_eq!(warnings.len(), 1);
        }

        let (config, warnings) = ServerConfig::from_lookup(lookup(&[("TOOLBELT_DISPLAY_PLACES", "12")]));
        assert_eq!(config.display_places, MAX_PLACES);
        assert!(warnings.is_empty());
    }
}
