//! The error channel
//!
//! Holds the single current [`ErrorRecord`] and fires the bus event named
//! [`ON_THROW_ERROR`] every time something is reported. Listeners take no
//! arguments; they keep a clone of the channel and read [`ErrorChannel::current`].
//!
//! Reports made from inside a listener are queued until the running dispatch
//! returns. The record only changes when a queued report is dispatched, so
//! every listener of one dispatch reads the same record.

use super::kind::{ErrorKind, Severity, CRITICAL_EXIT_CODE};
use super::record::{ErrorRecord, Origin};
use super::Classify;
use crate::events::{EventSystem, Listener};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Name of the bus event fired on every report
pub const ON_THROW_ERROR: &str = "on_throw_error";

type Terminator = Box<dyn Fn(i32)>;

struct ChannelState {
    current: RefCell<Rc<ErrorRecord>>,
    bus: RefCell<Weak<RefCell<EventSystem>>>,
    pending: RefCell<VecDeque<ErrorRecord>>,
    dispatching: Cell<bool>,
    print_errors: Cell<bool>,
    print_threshold: Cell<Severity>,
    terminator: Terminator,
}

/// Resets the dispatch flag even if a listener panics
struct DispatchGuard<'a> {
    state: &'a ChannelState,
}

impl<'a> DispatchGuard<'a> {
    fn enter(state: &'a ChannelState) -> Self {
        state.dispatching.set(true);
        Self { state }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.state.dispatching.set(false);
        self.state.pending.borrow_mut().clear();
    }
}

/// Shared handle to the current error record and the report entry point
///
/// Cloning is cheap and every clone refers to the same record.
#[derive(Clone)]
pub struct ErrorChannel {
    state: Rc<ChannelState>,
}

impl ErrorChannel {
    /// Create a channel that exits the process on critical reports
    pub fn new() -> Self {
        Self::with_terminator(|code| std::process::exit(code))
    }

    /// Create a channel with a custom action for critical reports
    ///
    /// The terminator receives the exit code. If it returns, `report`
    /// returns normally.
    pub fn with_terminator(terminator: impl Fn(i32) + 'static) -> Self {
        Self {
            state: Rc::new(ChannelState {
                current: RefCell::new(Rc::new(ErrorRecord::initial())),
                bus: RefCell::new(Weak::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                print_errors: Cell::new(false),
                print_threshold: Cell::new(Severity::Warning),
                terminator: Box::new(terminator),
            }),
        }
    }

    /// Log reports whose severity is at least `threshold`
    pub fn set_printing(&self, enabled: bool, threshold: Severity) {
        self.state.print_errors.set(enabled);
        self.state.print_threshold.set(threshold);
    }

    /// Fire `on_throw_error` on this bus from now on
    ///
    /// Only a weak reference is kept; dropping the bus disables the bridge.
    pub fn attach_bus(&self, bus: &Rc<RefCell<EventSystem>>) {
        *self.state.bus.borrow_mut() = Rc::downgrade(bus);
    }

    /// Stop firing events on report
    pub fn detach_bus(&self) {
        *self.state.bus.borrow_mut() = Weak::new();
    }

    /// Whether an attached bus is still alive
    pub fn has_bus(&self) -> bool {
        self.state.bus.borrow().strong_count() > 0
    }

    /// The record being dispatched, or the last one reported
    ///
    /// Returns a shared snapshot, so holding it across another report is fine.
    pub fn current(&self) -> Rc<ErrorRecord> {
        Rc::clone(&self.state.current.borrow())
    }

    /// Kind of the most recently reported error
    pub fn current_kind(&self) -> ErrorKind {
        self.state.current.borrow().kind
    }

    /// Whether a dispatch is running on this channel
    pub fn is_dispatching(&self) -> bool {
        self.state.dispatching.get()
    }

    /// Record an error, notify listeners, and terminate on critical kinds
    pub fn report(&self, kind: ErrorKind, message: impl Into<String>, origin: Origin) {
        let record = ErrorRecord::new(kind, message, origin);
        self.print(&record);

        if self.state.dispatching.get() {
            log::debug!("Queueing re-entrant report {} behind the dispatch", record.kind);
            self.state.pending.borrow_mut().push_back(record);
            return;
        }

        let _guard = DispatchGuard::enter(&self.state);
        self.dispatch(record);

        loop {
            let next = self.state.pending.borrow_mut().pop_front();
            let Some(next) = next else { break };
            self.dispatch(next);
        }
    }

    /// Report a classified error with the caller as origin
    #[track_caller]
    pub fn raise<E: Classify>(&self, error: &E) {
        self.report(error.kind(), error.to_string(), Origin::caller());
    }

    /// Turn a result into an option, reporting the error side
    #[track_caller]
    pub fn ok_or_report<T, E: Classify>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.report(error.kind(), error.to_string(), Origin::caller());
                None
            }
        }
    }

    fn dispatch(&self, record: ErrorRecord) {
        let critical = record.kind.is_critical();
        *self.state.current.borrow_mut() = Rc::new(record);

        if let Some(listeners) = self.bridge_listeners() {
            for listener in &listeners {
                listener();
            }
        }

        if critical {
            log::error!("Critical error reported, terminating with code {CRITICAL_EXIT_CODE}");
            (self.state.terminator)(CRITICAL_EXIT_CODE);
        }
    }

    fn bridge_listeners(&self) -> Option<Vec<Listener>> {
        let Some(bus) = self.state.bus.borrow().upgrade() else {
            log::trace!("No event bus attached, skipping {ON_THROW_ERROR}");
            return None;
        };
        let Ok(bus) = bus.try_borrow() else {
            log::warn!("Event bus is being modified, skipping {ON_THROW_ERROR}");
            return None;
        };
        let Some(event) = bus.get_event(ON_THROW_ERROR) else {
            log::trace!("Event {ON_THROW_ERROR} is not registered");
            return None;
        };
        Some(event.listeners())
    }

    fn print(&self, record: &ErrorRecord) {
        let severity = record.kind.severity();
        if !self.state.print_errors.get() || severity < self.state.print_threshold.get() {
            return;
        }
        match severity {
            Severity::Success => log::info!("{record}"),
            Severity::Warning => log::warn!("{record}"),
            _ => log::error!("{record}"),
        }
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChannel")
            .field("current", &self.current())
            .field("has_bus", &self.has_bus())
            .field("dispatching", &self.state.dispatching.get())
            .finish_non_exhaustive()
    }
}
