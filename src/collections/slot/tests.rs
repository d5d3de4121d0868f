#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::util::alloc::{CountedDrop, LiveCounted};

#[test]
fn test_default_is_empty() {
    let slot: Slot<u8> = Slot::default();
    assert!(!slot.has_value());
    assert_eq!(
        slot.value(),
        Err(EmptyAccess),
        "Reading an empty slot should fail with EmptyAccess."
    );
}

#[test]
fn test_assign_and_value() {
    let mut slot = Slot::new();
    slot.assign(5);
    assert!(slot.has_value());
    assert_eq!(slot.value(), Ok(&5));

    slot.assign(7);
    assert_eq!(slot.value(), Ok(&7), "assign should overwrite the held value.");

    *slot.value_mut().expect("slot is engaged") = 9;
    assert_eq!(slot.value(), Ok(&9));
}

#[test]
fn test_assign_drops_old_value() {
    let counter = CountedDrop::new(0);
    let mut slot = Slot::filled(counter.clone());

    slot.assign(counter.clone());
    assert_eq!(counter.take(), 1, "assign should drop the replaced value.");
}

#[test]
fn test_reset() {
    let counter = CountedDrop::new(0);
    let mut slot = Slot::filled(counter.clone());

    slot.reset();
    assert!(!slot.has_value());
    assert_eq!(counter.take(), 1, "reset should drop the held value.");

    slot.reset();
    assert_eq!(counter.take(), 0, "reset on an empty slot should be a no-op.");
}

#[test]
fn test_take() {
    let mut slot = Slot::filled(5);
    assert_eq!(slot.take(), Some(5));
    assert!(!slot.has_value());
    assert_eq!(slot.take(), None);
}

#[test]
fn test_error_message() {
    assert_eq!(
        Slot::<u8>::new().value().expect_err("slot is empty").to_string(),
        "Attempted to access the value of an empty slot!"
    );
}

#[test]
fn test_clone() {
    let full = Slot::filled(5);
    let empty: Slot<i32> = Slot::new();

    assert_eq!(full.clone(), full);
    assert_eq!(empty.clone(), empty);
    assert_ne!(full, empty);
}

#[test]
fn test_clone_from_cases() {
    // (engaged, engaged): assign over the held value.
    let mut target = Slot::filled(1);
    target.clone_from(&Slot::filled(2));
    assert_eq!(target.value(), Ok(&2));

    // (empty, engaged): construct into storage.
    let mut target = Slot::new();
    target.clone_from(&Slot::filled(3));
    assert_eq!(target.value(), Ok(&3));

    // (engaged, empty): equivalent to reset.
    let counter = CountedDrop::new(0);
    let mut target = Slot::filled(counter.clone());
    target.clone_from(&Slot::new());
    assert!(!target.has_value());
    assert_eq!(counter.take(), 1);

    // (empty, empty): no-op.
    let mut target: Slot<u8> = Slot::new();
    target.clone_from(&Slot::new());
    assert!(!target.has_value());
}

#[test]
fn test_live_count_returns_to_zero() {
    let live = Rc::new(Cell::new(0_isize));

    {
        let mut slot = Slot::filled(LiveCounted::new(&live));
        slot.assign(LiveCounted::new(&live));
        let clone = slot.clone();
        assert_eq!(live.get(), 2);

        slot.take();
        slot.assign(LiveCounted::new(&live));
        drop(clone);
        assert!(live.get() > 0);
    }

    assert_eq!(
        live.get(),
        0,
        "Every value the slot ever held should be dropped exactly once."
    );
}
