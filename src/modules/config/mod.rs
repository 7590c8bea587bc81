use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::{CONFIG_FILE, EXPORT_FILE, THROTTLE_MILLIS};

/// Runtime settings with sensible defaults. Loaded from an optional JSON
/// file next to the binary; the program never requires one to exist.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// When set, the generated default password is printed and logged.
    /// Stands in for email delivery, which is not a feature yet.
    pub debug: bool,
    /// Fixed delay inserted after every failed attempt, in milliseconds.
    pub throttle_ms: u64,
    /// Path of the obfuscated record dump written after a successful login.
    pub export_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: true,
            throttle_ms: THROTTLE_MILLIS,
            export_file: EXPORT_FILE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file, falling back to defaults
    /// when the file is missing or unparseable.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config file {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(), // No config file, use defaults.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.debug);
        assert_eq!(config.throttle_ms, THROTTLE_MILLIS);
        assert_eq!(config.export_file, EXPORT_FILE);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"throttle_ms": 250}"#).unwrap();
        assert_eq!(config.throttle_ms, 250);
        assert!(config.debug);
        assert_eq!(config.export_file, EXPORT_FILE);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = AppConfig {
            debug: false,
            throttle_ms: 10,
            export_file: "dump.txt".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert!(!parsed.debug);
        assert_eq!(parsed.throttle_ms, 10);
        assert_eq!(parsed.export_file, "dump.txt");
    }
}
