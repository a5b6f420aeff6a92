//! Registry of named events

use super::{Event, EventError};
use crate::foundation::collections::DynArray;

/// Default number of listener slots reserved per event
const DEFAULT_LISTENER_CAPACITY: usize = 1;

/// Event bus holding events by unique name
///
/// Lookup is a linear scan; a bus is expected to hold a handful of
/// long-lived events.
#[derive(Debug)]
pub struct EventSystem {
    events: DynArray<Event>,
    listener_capacity: usize,
}

impl EventSystem {
    /// Create an empty event system with room for `event_capacity` events
    pub fn new(event_capacity: usize) -> Result<Self, EventError> {
        Self::with_capacities(event_capacity, DEFAULT_LISTENER_CAPACITY)
    }

    /// Create an empty event system, also choosing the initial listener
    /// capacity of events it creates
    pub fn with_capacities(
        event_capacity: usize,
        listener_capacity: usize,
    ) -> Result<Self, EventError> {
        Ok(Self {
            events: DynArray::with_capacity(event_capacity)?,
            listener_capacity,
        })
    }

    /// Register a new event
    ///
    /// A name that is already registered is rejected with
    /// [`EventError::DuplicateEvent`] and the existing event is kept.
    pub fn add_event(&mut self, name: &str) -> Result<(), EventError> {
        if self.contains(name) {
            return Err(EventError::DuplicateEvent(name.to_string()));
        }

        let event = Event::new(name, self.listener_capacity)?;
        self.events.push(event)?;
        log::debug!("Registered event {name}");
        Ok(())
    }

    /// Remove an event and its listeners
    ///
    /// The most recently added event takes the removed one's slot.
    pub fn remove_event(&mut self, name: &str) -> Result<Event, EventError> {
        let index = self
            .events
            .iter()
            .position(|event| event.name() == name)
            .ok_or_else(|| EventError::EventNotFound(name.to_string()))?;
        Ok(self.events.swap_remove(index)?)
    }

    /// Find an event by exact name
    pub fn get_event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.name() == name)
    }

    /// Find an event by exact name for modification
    pub fn get_event_mut(&mut self, name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.name() == name)
    }

    /// Whether an event with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get_event(name).is_some()
    }

    /// Invoke the named event
    pub fn invoke(&self, name: &str) -> Result<(), EventError> {
        self.get_event(name)
            .ok_or_else(|| EventError::EventNotFound(name.to_string()))?
            .invoke();
        Ok(())
    }

    /// Number of registered events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Registered event names in storage order
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(Event::name)
    }
}

impl Drop for EventSystem {
    fn drop(&mut self) {
        log::debug!("Destroying event system with {} events", self.events.len());
    }
}
