//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter, still overridable by `RUST_LOG`
///
/// `filter` uses the `env_logger` syntax, e.g. `"info"` or `"ducky_core=debug"`.
pub fn init_with_filter(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

/// Like [`init_with_filter`], but returns `false` instead of panicking when a
/// logger is already installed
pub fn try_init_with_filter(filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .is_test(cfg!(test))
        .try_init()
        .is_ok()
}
