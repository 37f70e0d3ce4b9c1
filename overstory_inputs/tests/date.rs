// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `DateInput`.

use std::cell::RefCell;
use std::rc::Rc;

use overstory_inputs::{DateInput, FieldStatus, FormState};

#[test]
fn user_date_becomes_midnight_utc() {
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&seen);
    let mut due = DateInput::new().on_change(move |v| sink.borrow_mut().push(v.to_owned()));

    assert!(due.input("2024-03-01"));
    assert_eq!(due.value(), "2024-03-01T00:00:00.000Z");
    assert_eq!(due.display(), "2024-03-01");
    assert_eq!(*seen.borrow(), ["2024-03-01T00:00:00.000Z"]);
}

#[test]
fn invalid_date_empties_the_field() {
    let mut due = DateInput::new();
    due.input("2024-03-01");
    due.input("2024-02-30");
    assert_eq!(due.value(), "");
    assert_eq!(due.display(), "");
    assert_eq!(due.date(), None);
}

#[test]
fn pushed_timestamps_are_stored_as_is() {
    let mut due = DateInput::new();
    due.sync(None, Some("2024-03-01T15:45:00.000Z"));
    assert_eq!(due.value(), "2024-03-01T15:45:00.000Z");
    assert_eq!(due.display(), "2024-03-01");
}

#[test]
fn status_compares_dates_only() {
    let mut due = DateInput::new();
    due.sync(Some("2024-03-01T15:45:00.000Z"), None);
    assert_eq!(due.status(), FieldStatus::Idle);

    // Same day, different time of day.
    due.input("2024-03-01");
    assert_eq!(due.status(), FieldStatus::Idle);

    due.input("2024-03-02");
    assert_eq!(due.status(), FieldStatus::Modified);
}

#[test]
fn error_predicate_sees_the_timestamp() {
    let mut due = DateInput::new()
        .with_error_message(|v: &str| v.is_empty().then_some("date required"));
    due.input("not a date");
    assert_eq!(due.errors().unwrap().first(), "date required");
    assert_eq!(due.status(), FieldStatus::Invalid);

    due.input("1999-12-31");
    assert!(due.errors().is_none());
}

#[test]
fn disabled_ignores_edits() {
    let mut due = DateInput::new().with_disabled(true);
    assert!(!due.input("2024-03-01"));
    assert_eq!(due.value(), "");
    assert!(due.is_disabled());
}

#[test]
fn bound_input_reports_timestamps() {
    let form = Rc::new(RefCell::new(FormState::new()));
    let mut due = DateInput::bound("due", Rc::clone(&form));
    due.input("2030-01-15");
    assert_eq!(
        form.borrow().value("due"),
        Some("2030-01-15T00:00:00.000Z")
    );
}
