// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Masked single- and multi-line text input.

use core::fmt;

use understory_field::{
    ErrorMessages, ErrorState, Field, FieldStatus, FormControl, IntoErrorMessages,
    ParentController, Standalone,
};
use understory_mask::{FormatId, FormatterRegistry, ParseMode, Pipeline};

/// Placeholder shown when none is configured.
pub const TEXT_PLACEHOLDER: &str = "Digite aqui...";

type ChangeFn = Box<dyn FnMut(&str, &str)>;
type TextErrorFn = Box<dyn Fn(&str, &str) -> Option<ErrorMessages>>;

/// A text input whose value runs through a parse/format [`Pipeline`].
///
/// Every update, whether a user edit ([`TextInput::input`]) or a push from the
/// owner ([`TextInput::sync`]), does the same thing:
///
/// 1. `parsed = parse(raw)`, `formatted = format(parsed)`;
/// 2. the field value becomes `formatted`;
/// 3. `on_change(parsed, formatted)` fires;
/// 4. the error predicate runs on `(formatted, parsed)` and its result replaces
///    the error state.
pub struct TextInput<C: FormControl = Standalone> {
    field: Field<C>,
    pipeline: Pipeline,
    parent: ParentController,
    errors: ErrorState,
    error_fn: Option<TextErrorFn>,
    on_change: Option<ChangeFn>,
    parsed: String,
    label: Option<String>,
    placeholder: Option<String>,
    min_rows: u32,
    max_length: Option<usize>,
    disabled: bool,
}

impl TextInput {
    /// Creates an unformatted input that belongs to no form.
    pub fn new() -> Self {
        Self::with_field(Field::standalone())
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormControl> TextInput<C> {
    /// Creates an unformatted input reporting to `control` under `name`.
    pub fn bound(name: impl Into<String>, control: C) -> Self {
        Self::with_field(Field::bound(name, control))
    }

    /// Creates an unformatted input around an existing field.
    pub fn with_field(field: Field<C>) -> Self {
        Self {
            field,
            pipeline: Pipeline::new(),
            parent: ParentController::new(),
            errors: ErrorState::new(),
            error_fn: None,
            on_change: None,
            parsed: String::new(),
            label: None,
            placeholder: None,
            min_rows: 1,
            max_length: None,
            disabled: false,
        }
    }

    /// Replaces the whole pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Sets the built-in format.
    #[must_use]
    pub fn with_format(self, id: FormatId) -> Self {
        self.map_pipeline(|p| p.with_format(id))
    }

    /// Sets the built-in format by name; unknown names leave the text unformatted.
    #[must_use]
    pub fn with_format_name(self, name: &str) -> Self {
        self.map_pipeline(|p| p.with_format_name(name))
    }

    /// Sets the built-in parse mode.
    #[must_use]
    pub fn with_parse(self, mode: ParseMode) -> Self {
        self.map_pipeline(|p| p.with_parse(mode))
    }

    /// Sets the built-in parse mode by name; unknown names parse as identity.
    #[must_use]
    pub fn with_parse_name(self, name: &str) -> Self {
        self.map_pipeline(|p| p.with_parse_name(name))
    }

    /// Sets the custom parser, applied after the built-in parse mode.
    #[must_use]
    pub fn with_parser(self, parser: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.map_pipeline(|p| p.with_parser(parser))
    }

    /// Sets the custom formatter, applied after the built-in format.
    #[must_use]
    pub fn with_formatter(
        self,
        formatter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.map_pipeline(|p| p.with_formatter(formatter))
    }

    /// Replaces the formatter registry.
    #[must_use]
    pub fn with_registry(self, registry: FormatterRegistry) -> Self {
        self.map_pipeline(|p| p.with_registry(registry))
    }

    /// Keeps line breaks (textarea behavior) when `true`.
    #[must_use]
    pub fn with_multiline(self, multiline: bool) -> Self {
        self.map_pipeline(|p| p.with_multiline(multiline))
    }

    /// Minimum number of visible rows; values below one are raised to one.
    #[must_use]
    pub fn with_min_rows(mut self, rows: u32) -> Self {
        self.min_rows = rows.max(1);
        self
    }

    /// Maximum number of characters the user may type.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
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

    /// Sets the change callback, called with `(parsed, formatted)`.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the error predicate, called with `(formatted, parsed)`.
    #[must_use]
    pub fn with_error_message<R, F>(mut self, predicate: F) -> Self
    where
        R: IntoErrorMessages,
        F: Fn(&str, &str) -> R + 'static,
    {
        self.error_fn = Some(Box::new(move |formatted, parsed| {
            predicate(formatted, parsed).into_error_messages()
        }));
        self
    }

    fn map_pipeline(mut self, f: impl FnOnce(Pipeline) -> Pipeline) -> Self {
        self.pipeline = f(core::mem::take(&mut self.pipeline));
        self
    }

    /// Applies the owner's current default and live values.
    ///
    /// Returns the number of pushes applied (zero, one or two).
    pub fn sync(&mut self, default_value: Option<&str>, value: Option<&str>) -> usize {
        let pushes = self.parent.reconcile(default_value, value);
        for push in &pushes {
            self.update_value(push.value);
        }
        pushes.len()
    }

    /// Handles a user edit: `raw` is the full text of the control after the edit.
    ///
    /// Ignored while disabled. With a maximum length, `raw` is cut to that many
    /// characters before parsing.
    ///
    /// Returns `true` if the value was updated.
    pub fn input(&mut self, raw: &str) -> bool {
        if self.disabled {
            log::debug!(target: "overstory_inputs", "text input disabled; edit ignored");
            return false;
        }
        match self.max_length {
            Some(max) => match raw.char_indices().nth(max) {
                Some((cut, _)) => self.update_value(&raw[..cut]),
                None => self.update_value(raw),
            },
            None => self.update_value(raw),
        }
        true
    }

    /// Runs `raw` through the pipeline and publishes the result.
    pub fn update_value(&mut self, raw: &str) {
        let out = self.pipeline.run(raw);
        self.field.set(out.formatted.as_str());
        if let Some(on_change) = &mut self.on_change {
            on_change(&out.parsed, &out.formatted);
        }
        let messages = self
            .error_fn
            .as_ref()
            .and_then(|predicate| predicate(&out.formatted, &out.parsed));
        self.errors.apply(messages);
        self.parsed = out.parsed;
    }

    /// Enables or disables user edits.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The displayed (formatted) value.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The parsed value behind the displayed one.
    pub fn parsed(&self) -> &str {
        &self.parsed
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

    /// The placeholder, falling back to [`TEXT_PLACEHOLDER`].
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(TEXT_PLACEHOLDER)
    }

    /// Minimum number of visible rows.
    pub fn rows(&self) -> u32 {
        self.min_rows
    }

    /// Maximum number of characters the user may type.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns `true` if line breaks are kept.
    pub fn is_multiline(&self) -> bool {
        self.pipeline.is_multiline()
    }

    /// Returns `true` while user edits are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The underlying field.
    pub fn field(&self) -> &Field<C> {
        &self.field
    }
}

impl<C: FormControl + fmt::Debug> fmt::Debug for TextInput<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("field", &self.field)
            .field("parsed", &self.parsed)
            .field("pipeline", &self.pipeline)
            .field("errors", &self.errors)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
