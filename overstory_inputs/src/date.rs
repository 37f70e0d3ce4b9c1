// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar date input.

use core::fmt;

use chrono::NaiveDate;
use understory_field::{
    ErrorMessages, ErrorState, Field, FieldStatus, FormControl, IntoErrorMessages,
    ParentController, Standalone,
};

use crate::{ErrorFn, error_fn};

/// The text before `T` in an ISO-8601 timestamp, or the whole string.
///
/// ```rust
/// use overstory_inputs::date_part;
///
/// assert_eq!(date_part("2024-02-29T00:00:00.000Z"), "2024-02-29");
/// assert_eq!(date_part("2024-02-29"), "2024-02-29");
/// assert_eq!(date_part(""), "");
/// ```
#[must_use]
pub fn date_part(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

/// Converts a `yyyy-mm-dd` date into a UTC midnight timestamp.
///
/// Returns an empty string when `date` is not a valid calendar date.
///
/// ```rust
/// use overstory_inputs::date_to_iso;
///
/// assert_eq!(date_to_iso("2024-02-29"), "2024-02-29T00:00:00.000Z");
/// assert_eq!(date_to_iso("2023-02-29"), "");
/// assert_eq!(date_to_iso(""), "");
/// ```
#[must_use]
pub fn date_to_iso(date: &str) -> String {
    match parse_date(date) {
        Some(date) => format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
        None => {
            if !date.is_empty() {
                log::debug!(target: "overstory_inputs", "not a calendar date: {date:?}");
            }
            String::new()
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// A date input whose value is an ISO-8601 UTC timestamp.
///
/// The user edits a `yyyy-mm-dd` date; the field stores the timestamp of that
/// day at midnight UTC and displays the date part.
///
/// ```rust
/// use overstory_inputs::DateInput;
///
/// let mut birthday = DateInput::new();
/// birthday.input("1815-12-10");
/// assert_eq!(birthday.value(), "1815-12-10T00:00:00.000Z");
/// assert_eq!(birthday.display(), "1815-12-10");
///
/// birthday.input("1815-13-10");
/// assert_eq!(birthday.value(), "");
/// ```
pub struct DateInput<C: FormControl = Standalone> {
    field: Field<C>,
    parent: ParentController,
    errors: ErrorState,
    error_fn: Option<ErrorFn>,
    on_change: Option<Box<dyn FnMut(&str)>>,
    display: String,
    label: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
}

impl DateInput {
    /// Creates an empty input that belongs to no form.
    pub fn new() -> Self {
        Self::with_field(Field::standalone())
    }
}

impl Default for DateInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormControl> DateInput<C> {
    /// Creates an empty input reporting to `control` under `name`.
    pub fn bound(name: impl Into<String>, control: C) -> Self {
        Self::with_field(Field::bound(name, control))
    }

    /// Creates an empty input around an existing field.
    pub fn with_field(field: Field<C>) -> Self {
        Self {
            field,
            parent: ParentController::new(),
            errors: ErrorState::new(),
            error_fn: None,
            on_change: None,
            display: String::new(),
            label: None,
            placeholder: None,
            disabled: false,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Starts disabled when `true`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the change callback, called with the timestamp.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the error predicate, called with the timestamp.
    #[must_use]
    pub fn with_error_message<R, F>(mut self, predicate: F) -> Self
    where
        R: IntoErrorMessages,
        F: Fn(&str) -> R + 'static,
    {
        self.error_fn = Some(error_fn(predicate));
        self
    }

    /// Applies the owner's current default and live timestamps.
    ///
    /// Returns the number of pushes applied.
    pub fn sync(&mut self, default_value: Option<&str>, value: Option<&str>) -> usize {
        let pushes = self.parent.reconcile(default_value, value);
        for push in &pushes {
            self.update_value(push.value);
        }
        pushes.len()
    }

    /// Handles a user edit of the `yyyy-mm-dd` control.
    ///
    /// Returns `true` if the value was updated.
    pub fn input(&mut self, date: &str) -> bool {
        if self.disabled {
            log::debug!(target: "overstory_inputs", "date input disabled; edit ignored");
            return false;
        }
        self.update_value(&date_to_iso(date));
        true
    }

    /// Stores `timestamp` as is and refreshes the displayed date.
    pub fn update_value(&mut self, timestamp: &str) {
        self.field.set(timestamp);
        if let Some(on_change) = &mut self.on_change {
            on_change(timestamp);
        }
        self.display.clear();
        self.display.push_str(date_part(timestamp));
        let messages = self.error_fn.as_ref().and_then(|predicate| predicate(timestamp));
        self.errors.apply(messages);
    }

    /// Enables or disables user edits.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The stored timestamp.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The displayed `yyyy-mm-dd` date.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The displayed date, if it is a valid calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.display)
    }

    /// Current validation messages.
    pub fn errors(&self) -> Option<&ErrorMessages> {
        self.errors.messages()
    }

    /// Compares the date part of the default value with the displayed date.
    pub fn status(&self) -> FieldStatus {
        FieldStatus::resolve(
            self.parent.default_value().map(date_part),
            &self.display,
            self.errors.has_errors(),
        )
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Returns `true` while user edits are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The underlying field.
    pub fn field(&self) -> &Field<C> {
        &self.field
    }
}

impl<C: FormControl + fmt::Debug> fmt::Debug for DateInput<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateInput")
            .field("field", &self.field)
            .field("display", &self.display)
            .field("errors", &self.errors)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
