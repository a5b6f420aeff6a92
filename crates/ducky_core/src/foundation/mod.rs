//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Collections and data structures
//! - Text search helpers
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod text;
