//! # Ducky Core
//!
//! The substrate every other part of the Ducky engine builds on.
//!
//! ## Features
//!
//! - **Growable arrays**: [`DynArray`](foundation::collections::DynArray) with
//!   doubling growth and swap-remove
//! - **Error channel**: classified error reports with a single current record
//! - **Event bus**: named events holding zero-argument listeners
//! - **Error events**: every report fires `on_throw_error` before returning
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ducky_core::prelude::*;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core = CoreContext::init(CoreConfig::default())?;
//!
//!     // Show every error as it happens
//!     let errors = core.errors().clone();
//!     core.on_error(move || eprintln!("{}", *errors.current()));
//!
//!     let texture = "grass.png";
//!     ducky_core::throw_error!(core.errors(), ErrorKind::Warning, "texture {texture} missing");
//!
//!     core.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

// Core engine modules
pub mod core;

pub mod config;
pub mod error;
pub mod events;
pub mod foundation;

mod context;

pub use context::{CoreContext, CoreError};

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::{Config, CoreConfig},
        error::{Classify, ErrorChannel, ErrorKind, ErrorRecord, Origin, Severity, ON_THROW_ERROR},
        events::{Event, EventSystem, Listener, ListenerId},
        foundation::collections::DynArray,
        CoreContext, CoreError,
    };
}
