//! Error reporting
//!
//! - **Kinds**: numeric codes grouped into bands, with an explicit severity
//! - **Records**: the current error and where it came from
//! - **Channel**: the report entry point and the bridge to the event bus

pub mod channel;
pub mod kind;
pub mod record;

pub use channel::{ErrorChannel, ON_THROW_ERROR};
pub use kind::{Band, ErrorKind, Severity, CRITICAL_EXIT_CODE};
pub use record::{ErrorRecord, Origin};

/// Errors that know their own classification
///
/// Every subsystem error type implements this so it can be handed to
/// [`ErrorChannel::raise`] or [`ErrorChannel::ok_or_report`].
pub trait Classify: std::fmt::Display {
    /// Classification used when the error is reported
    fn kind(&self) -> ErrorKind;
}

/// Report an error with the current file, line and module as origin
///
/// ```
/// use ducky_core::error::{ErrorChannel, ErrorKind};
///
/// let channel = ErrorChannel::with_terminator(|_| {});
/// ducky_core::throw_error!(channel, ErrorKind::Warning, "{} listeners", 0);
/// assert_eq!(channel.current().message, "0 listeners");
/// ```
#[macro_export]
macro_rules! throw_error {
    ($channel:expr, $kind:expr, $($arg:tt)+) => {
        $channel.report(
            $kind,
            ::std::format!($($arg)+),
            $crate::error::Origin::new(
                ::std::file!(),
                ::std::line!(),
                ::std::option::Option::Some(::std::module_path!()),
            ),
        )
    };
}
