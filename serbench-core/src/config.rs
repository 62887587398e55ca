// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML benchmark configuration with strict validation.
//!
//! Every field is optional; an empty document yields the default run
//! (250 repetitions over bincode, JSON, XML and protobuf). Invalid values
//! are rejected before anything is measured.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::backend::BackendKind;
use crate::error::{BenchError, BenchResult, ConfigError};
use crate::types::{Niceness, Repetitions, DEFAULT_REPETITIONS};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "serbench.yaml";

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_repetitions")]
    repetitions: u32,
    #[serde(default)]
    warmup: u32,
    #[serde(default = "default_log_file")]
    log_file: String,
    #[serde(default = "default_backends")]
    backends: Vec<BackendKind>,
    #[serde(default = "default_pin_cpu")]
    pin_cpu: Option<usize>,
    #[serde(default = "default_raise_priority")]
    raise_priority: bool,
    #[serde(default = "default_niceness")]
    niceness: i32,
    #[serde(default)]
    pause_on_exit: bool,
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}

fn default_log_file() -> String {
    "measurements.txt".to_string()
}

fn default_backends() -> Vec<BackendKind> {
    BackendKind::DEFAULT.to_vec()
}

fn default_pin_cpu() -> Option<usize> {
    Some(0)
}

fn default_raise_priority() -> bool {
    true
}

fn default_niceness() -> i32 {
    Niceness::default().value()
}

/// Validated benchmark configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub repetitions: Repetitions,
    pub warmup: u32,
    pub log_file: PathBuf,
    pub backends: Vec<BackendKind>,
    /// Core to pin the process to; `None` leaves affinity untouched.
    pub pin_cpu: Option<usize>,
    pub raise_priority: bool,
    pub niceness: Niceness,
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repetitions: Repetitions::default(),
            warmup: 0,
            log_file: PathBuf::from(default_log_file()),
            backends: default_backends(),
            pin_cpu: default_pin_cpu(),
            raise_priority: default_raise_priority(),
            niceness: Niceness::default(),
            pause_on_exit: false,
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load `path` if given, otherwise the default path if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> BenchResult<Config> {
        match path {
            Some(path) => Self::load_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<Config> {
        // An empty document parses as null; treat it as an empty mapping.
        let content = if content.trim().is_empty() { "{}" } else { content };

        let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: format!("YAML parse error: {}", e),
        })?;

        Ok(Self::validate(raw)?)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
        let repetitions = Repetitions::new(raw.repetitions)?;
        let niceness = Niceness::new(raw.niceness)?;

        if raw.backends.is_empty() {
            return Err(ConfigError::InvalidFieldValue {
                field: "backends",
                value: "[]".to_string(),
                reason: "At least one backend must be selected".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for kind in &raw.backends {
            if !seen.insert(*kind) {
                return Err(ConfigError::InvalidFieldValue {
                    field: "backends",
                    value: kind.to_string(),
                    reason: "Backend listed more than once".to_string(),
                });
            }
        }

        if raw.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidFieldValue {
                field: "log_file",
                value: raw.log_file,
                reason: "Log file path cannot be empty".to_string(),
            });
        }

        Ok(Config {
            repetitions,
            warmup: raw.warmup,
            log_file: PathBuf::from(raw.log_file),
            backends: raw.backends,
            pin_cpu: raw.pin_cpu,
            raise_priority: raw.raise_priority,
            niceness,
            pause_on_exit: raw.pause_on_exit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
repetitions: 100
warmup: 2
log_file: /tmp/serbench.log
backends: [json, protobuf, msgpack]
pin_cpu: 1
raise_priority: false
niceness: -5
pause_on_exit: true
"#;

    #[test]
    fn test_valid_config() {
        let config = ConfigLoader::load_string(VALID_CONFIG).unwrap();
        assert_eq!(config.repetitions.get(), 100);
        assert_eq!(config.warmup, 2);
        assert_eq!(config.log_file, PathBuf::from("/tmp/serbench.log"));
        assert_eq!(
            config.backends,
            vec![
                BackendKind::Json,
                BackendKind::Protobuf,
                BackendKind::MessagePack
            ]
        );
        assert_eq!(config.pin_cpu, Some(1));
        assert!(!config.raise_priority);
        assert_eq!(config.niceness.value(), -5);
        assert!(config.pause_on_exit);
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConfigLoader::load_string("").unwrap();
        assert_eq!(config.repetitions.get(), 250);
        assert_eq!(config.warmup, 0);
        assert_eq!(config.log_file, PathBuf::from("measurements.txt"));
        assert_eq!(config.backends, BackendKind::DEFAULT.to_vec());
        assert_eq!(config.pin_cpu, Some(0));
        assert!(config.raise_priority);
        assert_eq!(config.niceness.value(), -10);
    }

    #[test]
    fn test_pinning_disabled_with_null() {
        let config = ConfigLoader::load_string("pin_cpu: null").unwrap();
        assert_eq!(config.pin_cpu, None);
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let result = ConfigLoader::load_string("repetitions: 0");
        assert!(matches!(
            result,
            Err(BenchError::Config(ConfigError::InvalidFieldValue {
                field: "repetitions",
                ..
            }))
        ));
    }

    #[test]
    fn test_empty_backends_rejected() {
        assert!(ConfigLoader::load_string("backends: []").is_err());
    }

    #[test]
    fn test_duplicate_backends_rejected() {
        assert!(ConfigLoader::load_string("backends: [json, xml, json]").is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = ConfigLoader::load_string("backends: [yaml]");
        assert!(matches!(
            result,
            Err(BenchError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ConfigLoader::load_string("repititions: 10").is_err());
    }

    #[test]
    fn test_niceness_out_of_range() {
        assert!(ConfigLoader::load_string("niceness: -40").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_file("/nonexistent/serbench.yaml");
        assert!(matches!(
            result,
            Err(BenchError::Config(ConfigError::NotFound { .. }))
        ));
    }
}
