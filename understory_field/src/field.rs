// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value buffer owned by an input.

use alloc::string::String;

use crate::control::{FormControl, Standalone};

/// The value of one input, mirrored into a [`FormControl`].
///
/// The input owns its `Field` exclusively; the control only receives copies.
/// Unnamed fields never talk to their control.
#[derive(Clone, Debug, Default)]
pub struct Field<C = Standalone> {
    name: Option<String>,
    control: C,
    value: String,
}

impl Field<Standalone> {
    /// Creates an empty field that belongs to no form.
    #[must_use]
    pub fn standalone() -> Self {
        Self::default()
    }
}

impl<C: FormControl> Field<C> {
    /// Creates an empty field registered with `control` under `name`.
    pub fn bound(name: impl Into<String>, mut control: C) -> Self {
        let name = name.into();
        control.register(&name);
        Self {
            name: Some(name),
            control,
            value: String::new(),
        }
    }

    /// The name reported to the control, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the value and reports it to the control.
    ///
    /// The control is notified even when the value is unchanged, matching how
    /// form stores track "touched" fields.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(name) = &self.name {
            self.control.field_changed(name, &self.value);
        }
    }

    /// The control this field reports to.
    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Mutable access to the control.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }
}

/// Coarse state of an input, for hosting layers that style by state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    /// The value matches the default value and there are no errors.
    #[default]
    Idle,
    /// The value differs from the default value.
    Modified,
    /// Validation messages are present. Takes precedence over `Modified`.
    Invalid,
}

impl FieldStatus {
    /// Derives the status from the default value, the displayed value and the
    /// error state. A missing default value compares as `""`.
    #[must_use]
    pub fn resolve(default_value: Option<&str>, current: &str, has_errors: bool) -> Self {
        if has_errors {
            Self::Invalid
        } else if default_value.unwrap_or_default() != current {
            Self::Modified
        } else {
            Self::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormState;

    #[test]
    fn standalone_field_keeps_its_value() {
        let mut field = Field::standalone();
        assert!(field.is_empty());
        field.set("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.name(), None);
    }

    #[test]
    fn bound_field_registers_and_reports() {
        let mut form = FormState::new();
        {
            let mut field = Field::bound("city", &mut form);
            field.set("Recife");
            field.set("Olinda");
        }
        assert_eq!(form.value("city"), Some("Olinda"));
        assert_eq!(form.field_revision("city"), 2);
    }

    #[test]
    fn status_precedence() {
        assert_eq!(FieldStatus::resolve(None, "", false), FieldStatus::Idle);
        assert_eq!(FieldStatus::resolve(Some("a"), "a", false), FieldStatus::Idle);
        assert_eq!(
            FieldStatus::resolve(Some("a"), "b", false),
            FieldStatus::Modified
        );
        assert_eq!(FieldStatus::resolve(None, "b", false), FieldStatus::Modified);
        assert_eq!(FieldStatus::resolve(Some("a"), "b", true), FieldStatus::Invalid);
    }
}
