//! # Core Module
//!
//! Configuration shared by the core context and its subsystems.

pub mod config;

// Re-export commonly used config types
pub use config::CoreConfig;
pub use crate::config::{Config, ConfigError};
