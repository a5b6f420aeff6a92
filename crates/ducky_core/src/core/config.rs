//! # Core Configuration
//!
//! Settings read once by [`CoreContext::init`](crate::CoreContext::init):
//! how reported errors are printed, the default log filter, and the initial
//! sizes of the event containers.
//!
//! Files may be TOML or RON. Missing fields take their default values:
//!
//! ```toml
//! print_errors = true
//! print_threshold = "failure"
//! log_filter = "ducky_core=debug"
//! ```

use crate::config::{Config, ConfigError};
use crate::error::Severity;
use serde::{Deserialize, Serialize};

/// Configuration of the core context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Log every report at or above `print_threshold`
    pub print_errors: bool,
    /// Lowest severity that gets printed
    pub print_threshold: Severity,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Initial number of event slots on the bus
    pub event_capacity: usize,
    /// Initial number of listener slots per event
    pub listener_capacity: usize,
}

impl CoreConfig {
    /// Enable or disable printing of reports
    pub fn with_printing(mut self, enabled: bool, threshold: Severity) -> Self {
        self.print_errors = enabled;
        self.print_threshold = threshold;
        self
    }

    /// Set the default log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the initial event and listener capacities
    pub fn with_capacities(mut self, events: usize, listeners: usize) -> Self {
        self.event_capacity = events;
        self.listener_capacity = listeners;
        self
    }

    /// Check that the values can be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid("event_capacity must be at least 1".to_string()));
        }
        if self.listener_capacity == 0 {
            return Err(ConfigError::Invalid("listener_capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            print_errors: cfg!(debug_assertions),
            print_threshold: Severity::Warning,
            log_filter: "info".to_string(),
            event_capacity: 1,
            listener_capacity: 1,
        }
    }
}

impl Config for CoreConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ducky_core_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("round_trip.toml");
        let config = CoreConfig::default()
            .with_printing(true, Severity::Failure)
            .with_log_filter("ducky_core=debug")
            .with_capacities(4, 2);

        config.save_to_file(&path).unwrap();
        let loaded = CoreConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("round_trip.ron");
        let config = CoreConfig::default().with_printing(false, Severity::Critical);

        config.save_to_file(&path).unwrap();
        let loaded = CoreConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "print_threshold = \"resource\"\n").unwrap();
        let loaded = CoreConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.print_threshold, Severity::Resource);
        assert_eq!(loaded.event_capacity, CoreConfig::default().event_capacity);
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        use crate::error::{Classify, ErrorKind};

        let unsupported = CoreConfig::default().save_to_file(temp_path("config.json"));
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(_))));

        let missing = CoreConfig::load_from_file(temp_path("missing.toml")).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::FileFailure);

        let fallback = CoreConfig::load_or_default(temp_path("missing.toml")).unwrap();
        assert_eq!(fallback, CoreConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_capacities() {
        assert!(CoreConfig::default().validate().is_ok());
        assert!(CoreConfig::default().with_capacities(0, 1).validate().is_err());
        assert!(CoreConfig::default().with_capacities(1, 0).validate().is_err());
    }
}
