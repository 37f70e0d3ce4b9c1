// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form-state binding.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use hashbrown::HashMap;

/// Receiver of field values, typically a form-state store.
///
/// Inputs register their field name once and report every value change. A
/// control never writes back into the input; the input's own buffer stays the
/// source of truth for what is displayed.
pub trait FormControl {
    /// Announces a field under `name`.
    fn register(&mut self, name: &str);

    /// Reports the new value of the field called `name`.
    fn field_changed(&mut self, name: &str, value: &str);
}

/// A control that discards everything.
///
/// Used when an input is not part of any form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Standalone;

impl FormControl for Standalone {
    fn register(&mut self, _name: &str) {}

    fn field_changed(&mut self, _name: &str, _value: &str) {}
}

impl<C: FormControl + ?Sized> FormControl for &mut C {
    fn register(&mut self, name: &str) {
        (**self).register(name);
    }

    fn field_changed(&mut self, name: &str, value: &str) {
        (**self).field_changed(name, value);
    }
}

impl<C: FormControl + ?Sized> FormControl for Rc<RefCell<C>> {
    fn register(&mut self, name: &str) {
        self.borrow_mut().register(name);
    }

    fn field_changed(&mut self, name: &str, value: &str) {
        self.borrow_mut().field_changed(name, value);
    }
}

#[derive(Clone, Debug, Default)]
struct Entry {
    value: String,
    revision: u64,
}

/// A store of named field values.
///
/// Registration creates an empty entry; each reported change replaces the
/// value and bumps both the field's revision and the store's revision.
///
/// ```rust
/// use understory_field::{FormControl, FormState};
///
/// let mut form = FormState::new();
/// form.register("email");
/// assert_eq!(form.value("email"), Some(""));
///
/// form.field_changed("email", "ada@example.com");
/// assert_eq!(form.value("email"), Some("ada@example.com"));
/// assert_eq!(form.field_revision("email"), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormState {
    fields: HashMap<String, Entry>,
    revision: u64,
}

impl FormState {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a field called `name` has been registered or reported.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The current value of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|e| e.value.as_str())
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.value.as_str()))
    }

    /// Number of known fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of changes reported for `name`; `0` for unknown fields.
    #[must_use]
    pub fn field_revision(&self, name: &str) -> u64 {
        self.fields.get(name).map_or(0, |e| e.revision)
    }

    /// Number of changes reported for all fields.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties every field value, keeping registrations.
    pub fn reset(&mut self) {
        let mut changed = false;
        for entry in self.fields.values_mut() {
            if !entry.value.is_empty() {
                entry.value.clear();
                entry.revision = entry.revision.wrapping_add(1);
                changed = true;
            }
        }
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
    }
}

impl FormControl for FormState {
    fn register(&mut self, name: &str) {
        if !self.fields.contains_key(name) {
            self.fields.insert(String::from(name), Entry::default());
        }
    }

    fn field_changed(&mut self, name: &str, value: &str) {
        let entry = self.fields.entry_ref(name).or_default();
        entry.value.clear();
        entry.value.push_str(value);
        entry.revision = entry.revision.wrapping_add(1);
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_accepts_anything() {
        let mut control = Standalone;
        control.register("x");
        control.field_changed("x", "y");
    }

    #[test]
    fn changes_without_registration_create_the_field() {
        let mut form = FormState::new();
        form.field_changed("age", "42");
        assert_eq!(form.value("age"), Some("42"));
        assert_eq!(form.revision(), 1);
    }

    #[test]
    fn register_does_not_clobber_values() {
        let mut form = FormState::new();
        form.field_changed("age", "42");
        form.register("age");
        assert_eq!(form.value("age"), Some("42"));
    }

    #[test]
    fn reset_clears_values_and_keeps_names() {
        let mut form = FormState::new();
        form.register("a");
        form.field_changed("b", "1");
        form.reset();
        assert_eq!(form.len(), 2);
        assert_eq!(form.value("b"), Some(""));
        assert_eq!(form.field_revision("b"), 2);
        assert_eq!(form.field_revision("a"), 0);
    }

    #[test]
    fn mutable_reference_forwards() {
        fn report(mut control: impl FormControl) {
            control.field_changed("a", "1");
        }

        let mut form = FormState::new();
        report(&mut form);
        assert_eq!(form.value("a"), Some("1"));
    }
}
