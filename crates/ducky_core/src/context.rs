//! Core context: owns the error channel and the event bus

use crate::{
    config::ConfigError,
    core::CoreConfig,
    error::{Classify, ErrorChannel, ErrorKind, ErrorRecord, Origin, ON_THROW_ERROR},
    events::{Event, EventError, EventSystem, ListenerId},
};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Process-level core state
///
/// Created once at startup with [`init`](Self::init) and torn down with
/// [`shutdown`](Self::shutdown). Everything that can fail or fire events
/// reaches the error channel and the bus through this context.
///
/// Methods that take a name report problems through the error channel and
/// return a sentinel (`false` or `None`) instead of an error value.
pub struct CoreContext {
    errors: ErrorChannel,
    events: Rc<RefCell<EventSystem>>,
    config: CoreConfig,
}

impl CoreContext {
    /// Create the error channel, the event bus and the `on_throw_error` event,
    /// in that order
    pub fn init(config: CoreConfig) -> Result<Self, CoreError> {
        Self::init_with_channel(config, ErrorChannel::new())
    }

    /// Like [`init`](Self::init) with a custom action for critical reports
    /// instead of exiting the process
    pub fn with_terminator(
        config: CoreConfig,
        terminator: impl Fn(i32) + 'static,
    ) -> Result<Self, CoreError> {
        Self::init_with_channel(config, ErrorChannel::with_terminator(terminator))
    }

    fn init_with_channel(config: CoreConfig, errors: ErrorChannel) -> Result<Self, CoreError> {
        log::info!("Initializing core...");
        errors.set_printing(config.print_errors, config.print_threshold);

        if let Err(e) = config.validate() {
            errors.raise(&e);
            return Err(e.into());
        }

        let created = EventSystem::with_capacities(config.event_capacity, config.listener_capacity);
        let events = match created {
            Ok(events) => Rc::new(RefCell::new(events)),
            Err(e) => {
                errors.report(
                    ErrorKind::Critical,
                    format!("Failed to create event system: {e}"),
                    Origin::caller().with_operation("CoreContext::init"),
                );
                return Err(e.into());
            }
        };
        errors.attach_bus(&events);

        let registered = events.borrow_mut().add_event(ON_THROW_ERROR);
        if let Err(e) = registered {
            errors.raise(&e);
            return Err(e.into());
        }

        log::debug!("Core ready with {} event(s)", events.borrow().event_count());
        Ok(Self { errors, events, config })
    }

    /// Tear down the bus, its events and their listeners, then the error channel
    pub fn shutdown(self) {
        log::info!("Shutting down core...");
        let Self { errors, events, .. } = self;
        errors.detach_bus();
        drop(events);
        drop(errors);
        log::info!("Core shutdown complete");
    }

    /// The error channel
    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    /// Configuration the context was created with
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Shared handle to the bus, for listeners that register events themselves
    pub fn bus(&self) -> Rc<RefCell<EventSystem>> {
        Rc::clone(&self.events)
    }

    /// Read access to the bus
    pub fn events(&self) -> Ref<'_, EventSystem> {
        self.events.borrow()
    }

    /// Report an error through the channel
    pub fn report(&self, kind: ErrorKind, message: impl Into<String>, origin: Origin) {
        self.errors.report(kind, message, origin);
    }

    /// Report a classified error with the caller as origin
    #[track_caller]
    pub fn raise<E: Classify>(&self, error: &E) {
        self.errors.raise(error);
    }

    /// The record being dispatched, or the last one reported
    pub fn current_error(&self) -> Rc<ErrorRecord> {
        self.errors.current()
    }

    /// Register an event; duplicates are reported as warnings
    #[track_caller]
    pub fn add_event(&self, name: &str) -> bool {
        let result = self.events.borrow_mut().add_event(name);
        self.errors.ok_or_report(result).is_some()
    }

    /// Remove an event and all of its listeners
    #[track_caller]
    pub fn remove_event(&self, name: &str) -> bool {
        let result = self.events.borrow_mut().remove_event(name);
        self.errors.ok_or_report(result).is_some()
    }

    /// Whether an event with this name exists
    pub fn has_event(&self, name: &str) -> bool {
        self.events.borrow().contains(name)
    }

    /// Register a listener on a named event
    #[track_caller]
    pub fn add_listener(&self, event: &str, listener: impl Fn() + 'static) -> Option<ListenerId> {
        let result = match self.events.borrow_mut().get_event_mut(event) {
            Some(target) => target.add_listener(listener),
            None => Err(EventError::EventNotFound(event.to_string())),
        };
        self.errors.ok_or_report(result)
    }

    /// Remove a listener from a named event
    #[track_caller]
    pub fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        let result = match self.events.borrow_mut().get_event_mut(event) {
            Some(target) => target.remove_listener(id),
            None => Err(EventError::EventNotFound(event.to_string())),
        };
        self.errors.ok_or_report(result).is_some()
    }

    /// Register a listener that runs on every error report
    #[track_caller]
    pub fn on_error(&self, listener: impl Fn() + 'static) -> Option<ListenerId> {
        self.add_listener(ON_THROW_ERROR, listener)
    }

    /// Run every listener of a named event
    ///
    /// Listeners run after the bus borrow is released, so they may add or
    /// remove events and listeners through [`bus`](Self::bus). Changes take
    /// effect on the next invocation.
    #[track_caller]
    pub fn invoke(&self, name: &str) -> bool {
        let listeners = self.events.borrow().get_event(name).map(Event::listeners);
        let Some(listeners) = listeners else {
            self.errors.raise(&EventError::EventNotFound(name.to_string()));
            return false;
        };

        for listener in &listeners {
            listener();
        }
        true
    }
}

impl std::fmt::Debug for CoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreContext")
            .field("errors", &self.errors)
            .field("events", &self.events.try_borrow().map(|e| e.event_count()).ok())
            .field("config", &self.config)
            .finish()
    }
}

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Event bus could not be set up
    #[error("Event system error: {0}")]
    Event(#[from] EventError),
}

impl Classify for CoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::Event(e) => e.kind(),
        }
    }
}
