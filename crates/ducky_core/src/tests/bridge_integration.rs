//! Integration tests for error reports reaching listeners through the bus
//!
//! Covers the full path: report -> current record -> `on_throw_error` ->
//! listeners, including critical termination and reports from inside listeners.

use crate::prelude::*;
use crate::error::CRITICAL_EXIT_CODE;
use crate::foundation::collections::ArrayError;
use crate::throw_error;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recording_context() -> (CoreContext, Rc<RefCell<Vec<i32>>>) {
    let exits = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&exits);
    let core = CoreContext::with_terminator(CoreConfig::default(), move |code| {
        recorded.borrow_mut().push(code);
    })
    .unwrap();
    (core, exits)
}

#[test]
fn test_every_report_fires_listener_once() {
    let (core, exits) = recording_context();
    let counter = Rc::new(Cell::new(0));
    let seen = Rc::clone(&counter);
    core.on_error(move || seen.set(seen.get() + 1)).unwrap();

    let kinds = [
        ErrorKind::Warning,
        ErrorKind::NullReference,
        ErrorKind::MemoryFailure,
        ErrorKind::ShaderCompileFailure,
        ErrorKind::Failure,
    ];
    for (i, kind) in kinds.into_iter().enumerate() {
        throw_error!(core.errors(), kind, "report {i}");
        assert_eq!(counter.get(), i + 1);
        assert_eq!(core.current_error().kind, kind);
        assert_eq!(core.current_error().message, format!("report {i}"));
    }
    assert!(exits.borrow().is_empty());
}

#[test]
fn test_listeners_run_in_registration_order() {
    let (core, _) = recording_context();
    let order = Rc::new(RefCell::new(Vec::new()));
    for n in 1..=4 {
        let order = Rc::clone(&order);
        core.on_error(move || order.borrow_mut().push(n)).unwrap();
    }

    core.report(ErrorKind::Failure, "ordered", Origin::caller());
    assert_eq!(*order.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn test_popup_listener_sees_full_record() {
    let (core, _) = recording_context();
    let popup = Rc::new(RefCell::new(String::new()));
    let errors = core.errors().clone();
    let text = Rc::clone(&popup);
    core.on_error(move || {
        let record = errors.current();
        *text.borrow_mut() = format!(
            "Error Code: {}\nError Name: {}\nError Function: {}\nError Message: {}",
            record.kind.code(),
            record.kind.name(),
            record.origin.operation_or_unknown(),
            record.message
        );
    })
    .unwrap();

    core.report(
        ErrorKind::WindowCreationFailure,
        "Failed to create SDL window",
        Origin::caller().with_operation("window_create"),
    );

    assert_eq!(
        *popup.borrow(),
        "Error Code: 71\n\
         Error Name: DUCKY_WINDOW_CREATION_FAILURE\n\
         Error Function: window_create\n\
         Error Message: Failed to create SDL window"
    );
}

#[test]
fn test_critical_report_exits_after_listener() {
    let (core, exits) = recording_context();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let exit_log = Rc::clone(&exits);
    core.on_error(move || {
        assert!(exit_log.borrow().is_empty(), "listener ran after termination");
        seen.set(seen.get() + 1);
    })
    .unwrap();

    core.report(ErrorKind::Critical, "unrecoverable", Origin::caller());

    assert_eq!(calls.get(), 1);
    assert_eq!(*exits.borrow(), vec![CRITICAL_EXIT_CODE]);
}

#[test]
fn test_non_critical_bands_never_exit() {
    let (core, exits) = recording_context();
    for kind in ErrorKind::ALL.into_iter().filter(|kind| !kind.is_critical()) {
        core.report(kind, "advisory", Origin::caller());
    }
    assert!(exits.borrow().is_empty());
}

#[test]
fn test_array_failures_reach_listeners() {
    let (core, _) = recording_context();
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let errors = core.errors().clone();
    let log = Rc::clone(&kinds);
    core.on_error(move || log.borrow_mut().push(errors.current_kind())).unwrap();

    let mut vertices = DynArray::with_capacity(2).unwrap();
    vertices.push([0.0_f32, 1.0, 0.0]).unwrap();

    assert!(core.errors().ok_or_report(vertices.get(1)).is_none());
    let zero: Result<DynArray<u32>, ArrayError> = DynArray::with_capacity(0);
    assert!(core.errors().ok_or_report(zero).is_none());

    assert_eq!(*kinds.borrow(), vec![ErrorKind::IndexOutOfBounds, ErrorKind::Failure]);
}

#[test]
fn test_duplicate_registration_fires_bridge_with_warning() {
    let (core, _) = recording_context();
    let warnings = Rc::new(Cell::new(0));
    let errors = core.errors().clone();
    let seen = Rc::clone(&warnings);
    core.on_error(move || {
        if errors.current_kind() == ErrorKind::Warning {
            seen.set(seen.get() + 1);
        }
    })
    .unwrap();

    assert!(!core.add_event(ON_THROW_ERROR));
    assert_eq!(warnings.get(), 1);
    assert_eq!(core.events().event_count(), 1);
}

#[test]
fn test_listener_reporting_again_is_queued() {
    let (core, _) = recording_context();
    let depth = Rc::new(Cell::new(0));
    let max_depth = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));

    let errors = core.errors().clone();
    let (d, m, c) = (Rc::clone(&depth), Rc::clone(&max_depth), Rc::clone(&calls));
    core.on_error(move || {
        d.set(d.get() + 1);
        m.set(m.get().max(d.get()));
        c.set(c.get() + 1);
        if c.get() < 3 {
            errors.report(ErrorKind::Warning, format!("retry {}", c.get()), Origin::caller());
        }
        d.set(d.get() - 1);
    })
    .unwrap();

    core.report(ErrorKind::Failure, "start", Origin::caller());

    assert_eq!(calls.get(), 3);
    assert_eq!(max_depth.get(), 1);
    assert_eq!(core.current_error().message, "retry 2");
}

#[test]
fn test_reports_after_shutdown_of_bus_are_recorded_only() {
    let (core, _) = recording_context();
    let errors = core.errors().clone();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    core.on_error(move || seen.set(seen.get() + 1)).unwrap();

    core.shutdown();
    errors.report(ErrorKind::Failure, "late", Origin::caller());

    assert_eq!(calls.get(), 0);
    assert_eq!(errors.current().message, "late");
}

#[test]
fn test_later_listeners_see_outer_record_before_nested_one() {
    let (core, _) = recording_context();
    let errors = core.errors().clone();
    core.on_error(move || {
        if errors.current_kind() == ErrorKind::Failure {
            errors.report(ErrorKind::Warning, "nested", Origin::caller());
        }
    })
    .unwrap();

    let popups = Rc::new(RefCell::new(Vec::new()));
    let errors = core.errors().clone();
    let shown = Rc::clone(&popups);
    core.on_error(move || shown.borrow_mut().push(errors.current().message.clone()))
        .unwrap();

    core.report(ErrorKind::Failure, "outer", Origin::caller());

    assert_eq!(*popups.borrow(), vec!["outer".to_string(), "nested".to_string()]);
}
