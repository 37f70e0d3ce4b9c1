// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-choice select.

use core::fmt;

use understory_field::{
    ErrorMessages, ErrorState, Field, FieldStatus, FormControl, IntoErrorMessages,
    ParentController, Standalone,
};

use crate::item::{SelectItem, label_of};
use crate::{ErrorFn, error_fn};

/// Text of the disabled option shown while nothing is selected.
pub const SELECT_PLACEHOLDER: &str = "Selecione aqui";

/// A select over a fixed list of [`SelectItem`]s.
///
/// ```rust
/// use overstory_inputs::{SelectInput, SelectItem};
///
/// let mut fruit = SelectInput::new(vec![
///     SelectItem::new("a", "Apple"),
///     SelectItem::new("b", "Banana"),
/// ]);
/// assert!(fruit.shows_placeholder());
///
/// fruit.choose("b");
/// assert_eq!(fruit.value(), "b");
/// assert_eq!(fruit.selected().map(|item| item.label.as_str()), Some("Banana"));
/// ```
pub struct SelectInput<C: FormControl = Standalone> {
    field: Field<C>,
    items: Vec<SelectItem>,
    parent: ParentController,
    errors: ErrorState,
    error_fn: Option<ErrorFn>,
    on_change: Option<Box<dyn FnMut(&str, &str)>>,
    label: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
}

impl SelectInput {
    /// Creates a select over `items` that belongs to no form.
    pub fn new(items: impl Into<Vec<SelectItem>>) -> Self {
        Self::with_field(Field::standalone(), items)
    }
}

impl<C: FormControl> SelectInput<C> {
    /// Creates a select over `items` reporting to `control` under `name`.
    pub fn bound(name: impl Into<String>, control: C, items: impl Into<Vec<SelectItem>>) -> Self {
        Self::with_field(Field::bound(name, control), items)
    }

    /// Creates a select over `items` around an existing field.
    pub fn with_field(field: Field<C>, items: impl Into<Vec<SelectItem>>) -> Self {
        Self {
            field,
            items: items.into(),
            parent: ParentController::new(),
            errors: ErrorState::new(),
            error_fn: None,
            on_change: None,
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

    /// Sets the placeholder option text.
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

    /// Sets the change callback, called with `(value, label)`.
    ///
    /// When no item has the value, the value is passed as the label too.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the error predicate, called with the selected value.
    #[must_use]
    pub fn with_error_message<R, F>(mut self, predicate: F) -> Self
    where
        R: IntoErrorMessages,
        F: Fn(&str) -> R + 'static,
    {
        self.error_fn = Some(error_fn(predicate));
        self
    }

    /// Applies the owner's current default and live values.
    ///
    /// Returns the number of pushes applied.
    pub fn sync(&mut self, default_value: Option<&str>, value: Option<&str>) -> usize {
        let pushes = self.parent.reconcile(default_value, value);
        for push in &pushes {
            self.update_value(push.value);
        }
        pushes.len()
    }

    /// Handles the user picking the option whose value is `value`.
    ///
    /// Returns `true` if the value was updated.
    pub fn choose(&mut self, value: &str) -> bool {
        if self.disabled {
            log::debug!(target: "overstory_inputs", "select disabled; choice ignored");
            return false;
        }
        self.update_value(value);
        true
    }

    /// Selects `value`, whether or not an item carries it.
    pub fn update_value(&mut self, value: &str) {
        self.field.set(value);
        if let Some(on_change) = &mut self.on_change {
            let label = label_of(&self.items, value).unwrap_or(value);
            on_change(value, label);
        }
        let messages = self.error_fn.as_ref().and_then(|predicate| predicate(value));
        self.errors.apply(messages);
    }

    /// Replaces the items, keeping the current value.
    pub fn set_items(&mut self, items: impl Into<Vec<SelectItem>>) {
        self.items = items.into();
    }

    /// Enables or disables user choices.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The items, in display order.
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// The selected value.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The item matching the selected value.
    pub fn selected(&self) -> Option<&SelectItem> {
        let value = self.field.value();
        self.items.iter().find(|item| item.value == value)
    }

    /// Returns `true` if the placeholder option should be rendered.
    ///
    /// It is shown only when the owner supplied no default value.
    pub fn shows_placeholder(&self) -> bool {
        self.parent.default_value().is_none_or(str::is_empty)
    }

    /// The placeholder option text, falling back to [`SELECT_PLACEHOLDER`].
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(SELECT_PLACEHOLDER)
    }

    /// Current validation messages.
    pub fn errors(&self) -> Option<&ErrorMessages> {
        self.errors.messages()
    }

    /// Idle, modified relative to the default value, or invalid.
    pub fn status(&self) -> FieldStatus {
        FieldStatus::resolve(
            self.parent.default_value(),
            self.field.value(),
            self.errors.has_errors(),
        )
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` while user choices are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The underlying field.
    pub fn field(&self) -> &Field<C> {
        &self.field
    }
}

impl<C: FormControl + fmt::Debug> fmt::Debug for SelectInput<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectInput")
            .field("field", &self.field)
            .field("items", &self.items)
            .field("errors", &self.errors)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
