// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SelectInput`.

use std::cell::RefCell;
use std::rc::Rc;

use overstory_inputs::{FieldStatus, FormState, SELECT_PLACEHOLDER, SelectInput, SelectItem};

fn states() -> Vec<SelectItem> {
    vec![
        SelectItem::new("PE", "Pernambuco"),
        SelectItem::new("BA", "Bahia"),
        ("CE", "Ceará").into(),
    ]
}

type Log = Rc<RefCell<Vec<(String, String)>>>;

fn recorded(select: SelectInput) -> (Log, SelectInput) {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    let select = select.on_change(move |value, label| {
        sink.borrow_mut().push((value.to_owned(), label.to_owned()));
    });
    (log, select)
}

#[test]
fn choose_reports_value_and_label() {
    let (log, mut state) = recorded(SelectInput::new(states()));
    assert!(state.choose("BA"));
    assert_eq!(state.value(), "BA");
    assert_eq!(*log.borrow(), [("BA".to_owned(), "Bahia".to_owned())]);
}

#[test]
fn unknown_value_uses_itself_as_label() {
    let (log, mut state) = recorded(SelectInput::new(states()));
    state.sync(None, Some("SP"));
    assert_eq!(state.value(), "SP");
    assert!(state.selected().is_none());
    assert_eq!(*log.borrow(), [("SP".to_owned(), "SP".to_owned())]);
}

#[test]
fn default_selection_is_declarative() {
    let mut state = SelectInput::new(states());
    state.sync(Some("CE"), None);
    assert_eq!(state.selected(), Some(&SelectItem::new("CE", "Ceará")));
    assert!(!state.shows_placeholder());
    assert_eq!(state.status(), FieldStatus::Idle);
}

#[test]
fn placeholder_only_without_default() {
    let mut state = SelectInput::new(states());
    assert!(state.shows_placeholder());
    assert_eq!(state.placeholder(), SELECT_PLACEHOLDER);

    // A live value alone does not hide it.
    state.sync(None, Some("PE"));
    assert!(state.shows_placeholder());
}

#[test]
fn errors_follow_choices() {
    let mut state = SelectInput::new(states())
        .with_error_message(|v: &str| (v == "BA").then(|| vec!["closed", "try later"]));
    state.choose("BA");
    assert_eq!(state.errors().unwrap().as_slice(), ["closed", "try later"]);
    state.choose("PE");
    assert!(state.errors().is_none());
}

#[test]
fn disabled_ignores_choices() {
    let mut state = SelectInput::new(states()).with_disabled(true);
    assert!(!state.choose("PE"));
    assert_eq!(state.value(), "");
    state.sync(None, Some("PE"));
    assert_eq!(state.value(), "PE");
}

#[test]
fn replacing_items_keeps_the_value() {
    let mut state = SelectInput::new(states());
    state.choose("PE");
    state.set_items(vec![SelectItem::new("PE", "PE")]);
    assert_eq!(state.value(), "PE");
    assert_eq!(state.items().len(), 1);
}

#[test]
fn bound_select_reports_values() {
    let form = Rc::new(RefCell::new(FormState::new()));
    let mut state = SelectInput::bound("uf", Rc::clone(&form), states());
    state.choose("CE");
    assert_eq!(form.borrow().value("uf"), Some("CE"));
}
