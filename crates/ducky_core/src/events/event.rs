//! A single named event and its listeners

use super::{EventError, Listener, ListenerId};
use crate::foundation::collections::DynArray;
use std::fmt;
use std::rc::Rc;

struct ListenerEntry {
    id: ListenerId,
    callback: Listener,
}

/// Named broadcast channel
///
/// Listeners run in the order they were added. Removing a listener moves the
/// most recently added one into its slot, so removal changes the order of the
/// remaining listeners.
pub struct Event {
    name: String,
    listeners: DynArray<ListenerEntry>,
    next_id: u64,
}

impl Event {
    /// Create an event with room for `listener_capacity` listeners
    pub fn new(name: impl Into<String>, listener_capacity: usize) -> Result<Self, EventError> {
        Ok(Self {
            name: name.into(),
            listeners: DynArray::with_capacity(listener_capacity)?,
            next_id: 0,
        })
    }

    /// Event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a callback
    pub fn add_listener(
        &mut self,
        listener: impl Fn() + 'static,
    ) -> Result<ListenerId, EventError> {
        self.add_shared_listener(Rc::new(listener))
    }

    /// Register a callback that is already shared
    pub fn add_shared_listener(&mut self, callback: Listener) -> Result<ListenerId, EventError> {
        let id = ListenerId(self.next_id);
        self.listeners.push(ListenerEntry { id, callback })?;
        self.next_id += 1;
        Ok(id)
    }

    /// Unregister a callback
    pub fn remove_listener(&mut self, id: ListenerId) -> Result<(), EventError> {
        let index = self
            .listeners
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| EventError::ListenerNotFound {
                event: self.name.clone(),
                id,
            })?;
        self.listeners.swap_remove(index)?;
        Ok(())
    }

    /// Whether `id` is registered
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|entry| entry.id == id)
    }

    /// Number of registered callbacks
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Snapshot of the callbacks in invocation order
    ///
    /// Lets a caller release its borrow of the owning bus before running them.
    pub fn listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|entry| Rc::clone(&entry.callback)).collect()
    }

    /// Call every listener once, in order
    ///
    /// The event stays borrowed while listeners run. Use [`listeners`](Self::listeners)
    /// when listeners may need to modify the bus that owns this event.
    pub fn invoke(&self) {
        log::trace!("Invoking event {} ({} listeners)", self.name, self.listeners.len());
        for entry in &self.listeners {
            (entry.callback)();
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
