//! Console stand-in for the window layer's message boxes
//!
//! The real window layer shows a native modal dialog; this prints the same
//! text to stderr so the demo runs headless.

use ducky_core::error::{ErrorRecord, Severity};
use ducky_core::events::ListenerId;
use ducky_core::CoreContext;

/// Message box flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    /// Informational
    Info,
    /// Something looks wrong
    Warning,
    /// Something went wrong
    Error,
}

impl PopupKind {
    /// Flavour used for a report of the given severity
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Success => Self::Info,
            Severity::Warning => Self::Warning,
            _ => Self::Error,
        }
    }
}

/// Show a message box
pub fn show(kind: PopupKind, title: &str, message: &str) {
    let banner = match kind {
        PopupKind::Info => "INFO",
        PopupKind::Warning => "WARNING",
        PopupKind::Error => "ERROR",
    };
    eprintln!("+---- [{banner}] {title} ----");
    for line in message.lines() {
        eprintln!("| {line}");
    }
    eprintln!("+----");
}

/// Text shown for a reported error
pub fn error_report(record: &ErrorRecord) -> String {
    format!(
        ":(\nOops! Something went wrong, full details below.\n\n\
         Error Code: {}\nError Name: {}\nError File: {}:{}\nError Function: {}\nError Message: {}",
        record.kind.code(),
        record.kind.name(),
        record.origin.file,
        record.origin.line,
        record.origin.operation_or_unknown(),
        record.message,
    )
}

/// Show a popup for every error reported through `core`
pub fn install(core: &CoreContext) -> Option<ListenerId> {
    let errors = core.errors().clone();
    core.on_error(move || {
        let record = errors.current();
        let kind = PopupKind::for_severity(record.kind.severity());
        show(kind, "Ducky Error", &error_report(&record));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ducky_core::error::{ErrorKind, Origin};

    #[test]
    fn test_error_report_lists_every_field() {
        let record = ErrorRecord::new(
            ErrorKind::ShaderCompileFailure,
            "missing semicolon",
            Origin::new("gfx.rs", 40, Some("shader_compile")),
        );
        let text = error_report(&record);

        assert!(text.starts_with(":(\nOops!"));
        assert!(text.contains("Error Code: 81\n"));
        assert!(text.contains("Error Name: DUCKY_SHADER_COMPILE_FAILURE\n"));
        assert!(text.contains("Error File: gfx.rs:40\n"));
        assert!(text.contains("Error Function: shader_compile\n"));
        assert!(text.ends_with("Error Message: missing semicolon"));
    }

    #[test]
    fn test_popup_kind_follows_severity() {
        assert_eq!(PopupKind::for_severity(Severity::Warning), PopupKind::Warning);
        assert_eq!(PopupKind::for_severity(Severity::Resource), PopupKind::Error);
        assert_eq!(PopupKind::for_severity(Severity::Success), PopupKind::Info);
    }
}
