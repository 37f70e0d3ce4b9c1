// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select with a free-text search box.

use core::fmt;

use understory_field::{
    ErrorMessages, ErrorState, Field, FieldStatus, FormControl, IntoErrorMessages,
    ParentController, Standalone,
};

use crate::item::{SelectItem, label_of};
use crate::{ErrorFn, error_fn};

/// Placeholder of the search box when none is configured.
pub const AUTOCOMPLETE_PLACEHOLDER: &str = "Digite para buscar";

/// Message shown in the open list when no item matches the search.
pub const NO_RESULTS_MESSAGE: &str = "Nenhum valor encontrado";

/// Items whose label contains `search`, ignoring case, in their original order.
///
/// An empty search matches every item.
///
/// ```rust
/// use overstory_inputs::{SelectItem, filter_items};
///
/// let items = [SelectItem::new("1", "Apple"), SelectItem::new("2", "Banana")];
/// let found: Vec<_> = filter_items(&items, "AN").iter().map(|i| i.value.as_str()).collect();
/// assert_eq!(found, ["2"]);
/// ```
pub fn filter_items<'a>(items: &'a [SelectItem], search: &str) -> Vec<&'a SelectItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .collect()
}

/// A select whose options are narrowed by typing part of their label.
///
/// The input tracks a search text, whether the option list is open, and
/// whether the pointer is pressed on an option. The last one keeps the list
/// open across the blur that a click on an option causes, so the click can
/// land.
///
/// ```rust
/// use overstory_inputs::{AutocompleteSelect, SelectItem};
///
/// let mut fruit = AutocompleteSelect::new(vec![
///     SelectItem::new("1", "Apple"),
///     SelectItem::new("2", "Banana"),
/// ]);
///
/// fruit.type_search("ap");
/// assert_eq!(fruit.filtered_items().len(), 1);
///
/// fruit.press_item();
/// fruit.blur();
/// assert!(fruit.is_open());
/// assert!(fruit.click_item(0));
///
/// assert_eq!(fruit.value(), "1");
/// assert_eq!(fruit.search(), "Apple");
/// assert!(!fruit.is_open());
/// ```
pub struct AutocompleteSelect<C: FormControl = Standalone> {
    field: Field<C>,
    items: Vec<SelectItem>,
    search: String,
    open: bool,
    clicking_item: bool,
    parent: ParentController,
    errors: ErrorState,
    error_fn: Option<ErrorFn>,
    on_change: Option<Box<dyn FnMut(&str, Option<&str>)>>,
    on_select: Option<Box<dyn FnMut(&str, &str)>>,
    on_clear: Option<Box<dyn FnMut()>>,
    label: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
}

impl AutocompleteSelect {
    /// Creates a closed, empty autocomplete over `items` that belongs to no form.
    pub fn new(items: impl Into<Vec<SelectItem>>) -> Self {
        Self::with_field(Field::standalone(), items)
    }
}

impl<C: FormControl> AutocompleteSelect<C> {
    /// Creates an autocomplete over `items` reporting to `control` under `name`.
    pub fn bound(name: impl Into<String>, control: C, items: impl Into<Vec<SelectItem>>) -> Self {
        Self::with_field(Field::bound(name, control), items)
    }

    /// Creates an autocomplete over `items` around an existing field.
    pub fn with_field(field: Field<C>, items: impl Into<Vec<SelectItem>>) -> Self {
        Self {
            field,
            items: items.into(),
            search: String::new(),
            open: false,
            clicking_item: false,
            parent: ParentController::new(),
            errors: ErrorState::new(),
            error_fn: None,
            on_change: None,
            on_select: None,
            on_clear: None,
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

    /// Sets the search box placeholder.
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
    /// Typing and clearing report `("", None)`.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str, Option<&str>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the callback for a user click on an option, called with `(value, label)`.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Sets the callback for the clear button.
    #[must_use]
    pub fn on_clear(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(callback));
        self
    }

    /// Sets the error predicate, called with the committed value.
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

    /// Commits `value` and shows the label of its item in the search box.
    ///
    /// A value no item carries is still committed, with an empty search box.
    pub fn update_value(&mut self, value: &str) {
        let label = label_of(&self.items, value);
        if label.is_none() {
            log::debug!(target: "overstory_inputs", "no item has value {value:?}");
        }
        self.search.clear();
        self.search.push_str(label.unwrap_or_default());
        self.field.set(value);
        if let Some(on_change) = &mut self.on_change {
            on_change(value, label);
        }
        self.validate(value);
    }

    /// Handles the user typing `text` into the search box.
    ///
    /// Drops the committed value and opens the list.
    pub fn type_search(&mut self, text: &str) {
        if self.ignored("search") {
            return;
        }
        self.search.clear();
        self.search.push_str(text);
        self.field.set("");
        self.open = true;
        if let Some(on_change) = &mut self.on_change {
            on_change("", None);
        }
        self.validate("");
    }

    /// Handles the search box gaining focus.
    pub fn focus(&mut self) {
        if self.ignored("focus") {
            return;
        }
        self.open = true;
    }

    /// Handles the search box losing focus.
    ///
    /// The list stays open while an option is being pressed.
    pub fn blur(&mut self) {
        if !self.clicking_item {
            self.open = false;
        }
    }

    /// Handles the pointer going down on an option.
    pub fn press_item(&mut self) {
        if self.ignored("press") {
            return;
        }
        self.clicking_item = true;
    }

    /// Handles the pointer leaving an option.
    pub fn leave_item(&mut self) {
        self.clicking_item = false;
    }

    /// Handles a click on the option at `index` in [`Self::filtered_items`].
    ///
    /// Returns `false` if disabled or if there is no such option.
    pub fn click_item(&mut self, index: usize) -> bool {
        if self.ignored("click") {
            return false;
        }
        let Some(item) = self.filtered_items().get(index).map(|item| (*item).clone()) else {
            log::debug!(target: "overstory_inputs", "no option at index {index}");
            return false;
        };
        self.field.set(item.value.as_str());
        self.search.clone_from(&item.label);
        self.open = false;
        if let Some(on_change) = &mut self.on_change {
            on_change(&item.value, Some(&item.label));
        }
        if let Some(on_select) = &mut self.on_select {
            on_select(&item.value, &item.label);
        }
        self.clicking_item = false;
        self.validate(&item.value);
        true
    }

    /// Handles the clear button: drops the committed value and the search.
    pub fn clear(&mut self) {
        if self.ignored("clear") {
            return;
        }
        self.field.set("");
        self.search.clear();
        if let Some(on_clear) = &mut self.on_clear {
            on_clear();
        }
        if let Some(on_change) = &mut self.on_change {
            on_change("", None);
        }
        self.open = false;
        self.validate("");
    }

    fn ignored(&self, event: &str) -> bool {
        if self.disabled {
            log::debug!(target: "overstory_inputs", "autocomplete disabled; {event} ignored");
        }
        self.disabled
    }

    fn validate(&mut self, value: &str) {
        let messages = self.error_fn.as_ref().and_then(|predicate| predicate(value));
        self.errors.apply(messages);
    }

    /// The options to list.
    ///
    /// Every item while a value is committed, otherwise those matching the
    /// search text.
    pub fn filtered_items(&self) -> Vec<&SelectItem> {
        if self.is_committed() {
            self.items.iter().collect()
        } else {
            filter_items(&self.items, &self.search)
        }
    }

    /// Replaces the items, keeping the committed value and the search text.
    pub fn set_items(&mut self, items: impl Into<Vec<SelectItem>>) {
        self.items = items.into();
    }

    /// Enables or disables user events.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// All items, in display order.
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// The committed value, or `""`.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Returns `true` if a value is committed.
    pub fn is_committed(&self) -> bool {
        !self.field.is_empty()
    }

    /// The text of the search box.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns `true` if the option list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` while the pointer is pressed on an option.
    pub fn is_clicking_item(&self) -> bool {
        self.clicking_item
    }

    /// Returns `true` if the clear button should be rendered.
    pub fn shows_clear(&self) -> bool {
        self.is_committed()
    }

    /// The message to render in place of an empty option list, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.open && self.filtered_items().is_empty()).then_some(NO_RESULTS_MESSAGE)
    }

    /// The search box placeholder, falling back to [`AUTOCOMPLETE_PLACEHOLDER`].
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(AUTOCOMPLETE_PLACEHOLDER)
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

    /// Returns `true` while user events are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The underlying field.
    pub fn field(&self) -> &Field<C> {
        &self.field
    }
}

impl<C: FormControl + fmt::Debug> fmt::Debug for AutocompleteSelect<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteSelect")
            .field("field", &self.field)
            .field("search", &self.search)
            .field("open", &self.open)
            .field("clicking_item", &self.clicking_item)
            .field("errors", &self.errors)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
