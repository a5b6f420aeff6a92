//! Named broadcast events
//!
//! An [`EventSystem`] is a registry of [`Event`]s looked up by name. Each
//! event keeps its listeners in registration order and calls every one of
//! them, with no arguments, when invoked. Dispatch is synchronous: there is
//! no queue and no return value is examined.

mod event;
mod system;

pub use event::Event;
pub use system::EventSystem;

use crate::error::{Classify, ErrorKind};
use crate::foundation::collections::ArrayError;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Zero-argument callback registered on an event
pub type Listener = Rc<dyn Fn()>;

/// Identifies a listener within the event it was added to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Event system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Name already registered on this bus
    #[error("Event with the same name already exists: {0}")]
    DuplicateEvent(String),

    /// No event with this name
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// Listener id unknown to the event
    #[error("Listener {id} is not registered on event {event}")]
    ListenerNotFound {
        /// Event name
        event: String,
        /// Listener that was looked up
        id: ListenerId,
    },

    /// Listener or event storage failed
    #[error(transparent)]
    Storage(#[from] ArrayError),
}

impl Classify for EventError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateEvent(_) => ErrorKind::Warning,
            Self::EventNotFound(_) => ErrorKind::NullReference,
            Self::ListenerNotFound { .. } => ErrorKind::Failure,
            Self::Storage(error) => error.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(EventError::DuplicateEvent("a".into()).kind(), ErrorKind::Warning);
        assert_eq!(EventError::EventNotFound("a".into()).kind(), ErrorKind::NullReference);
        assert_eq!(
            EventError::from(ArrayError::Allocation { requested: 8 }).kind(),
            ErrorKind::MemoryFailure
        );
    }
}
