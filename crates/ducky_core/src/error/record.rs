//! Error records and their provenance

use super::kind::ErrorKind;
use std::fmt;
use std::panic::Location;

/// Where a report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// Source file of the reporting call site
    pub file: &'static str,
    /// Line of the reporting call site
    pub line: u32,
    /// Operation (function or module path) that reported, when known
    pub operation: Option<&'static str>,
}

impl Origin {
    /// Create an origin from explicit parts
    pub const fn new(file: &'static str, line: u32, operation: Option<&'static str>) -> Self {
        Self { file, line, operation }
    }

    /// Origin of the caller of the current function
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            operation: None,
        }
    }

    /// Attach an operation name
    #[must_use]
    pub const fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Operation name, or `"<unknown>"`
    pub fn operation_or_unknown(&self) -> &'static str {
        self.operation.unwrap_or("<unknown>")
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}, {}", self.file, self.line, self.operation_or_unknown())
    }
}

/// The most recently reported error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Classification
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// Call site that reported
    pub origin: Origin,
}

impl ErrorRecord {
    /// Create a record
    pub fn new(kind: ErrorKind, message: impl Into<String>, origin: Origin) -> Self {
        Self {
            kind,
            message: message.into(),
            origin,
        }
    }

    /// Record a fresh channel starts with
    pub(crate) fn initial() -> Self {
        Self::new(ErrorKind::Success, "", Origin::new(file!(), line!(), Some(module_path!())))
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: ({}) {}", self.kind.code(), self.origin, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_origin_points_here() {
        let origin = Origin::caller();
        assert!(origin.file.ends_with("record.rs"));
        assert_eq!(origin.operation, None);
        assert_eq!(origin.operation_or_unknown(), "<unknown>");
    }

    #[test]
    fn test_record_display_matches_log_format() {
        let record = ErrorRecord::new(
            ErrorKind::NullReference,
            "array is NULL.",
            Origin::new("mesh.rs", 12, Some("load_mesh")),
        );
        assert_eq!(record.to_string(), "[12]: (mesh.rs:12, load_mesh) array is NULL.");
    }
}
