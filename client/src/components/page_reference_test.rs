use std::cell::{Cell, RefCell};

use super::*;

#[test]
fn activation_reports_reference_once() {
    let calls = RefCell::new(Vec::new());
    let reference = PageRef::new("d1", 3);

    activate(|| {}, &reference, |id, page| calls.borrow_mut().push((id, page)));

    assert_eq!(calls.into_inner(), vec![("d1".to_owned(), 3)]);
}

#[test]
fn activation_suppresses_default_before_callback() {
    let order = RefCell::new(Vec::new());
    let reference = PageRef::new("d1", 3);

    activate(
        || order.borrow_mut().push("prevent_default"),
        &reference,
        |_, _| order.borrow_mut().push("callback"),
    );

    assert_eq!(order.into_inner(), vec!["prevent_default", "callback"]);
}

#[test]
fn repeated_activations_are_independent() {
    let count = Cell::new(0);
    let prevented = Cell::new(0);
    let reference = PageRef::new("abc-123", 7);

    for _ in 0..3 {
        activate(|| prevented.set(prevented.get() + 1), &reference, |_, page| {
            assert_eq!(page, 7);
            count.set(count.get() + 1);
        });
    }

    assert_eq!(count.get(), 3);
    assert_eq!(prevented.get(), 3);
}
