// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image URL input with a preview.

use understory_field::{ErrorMessages, FieldStatus, FormControl, Standalone};

use crate::text::TextInput;

/// A [`TextInput`] holding an image URL, plus the URL of the preview.
///
/// The preview follows the formatted text on every update and is dropped when
/// the host reports that the image failed to load. Dropping the preview leaves
/// the text alone.
///
/// ```rust
/// use overstory_inputs::ImageInput;
///
/// let mut logo = ImageInput::new().with_label("Logo");
/// logo.input("https://example.com/logo.png");
/// assert_eq!(logo.preview_url(), Some("https://example.com/logo.png"));
///
/// logo.on_load_error();
/// assert_eq!(logo.preview_url(), None);
/// assert_eq!(logo.value(), "https://example.com/logo.png");
/// ```
#[derive(Debug)]
pub struct ImageInput<C: FormControl = Standalone> {
    text: TextInput<C>,
    label: Option<String>,
    url: String,
}

impl ImageInput {
    /// Creates an empty input that belongs to no form.
    pub fn new() -> Self {
        Self::with_text(TextInput::new())
    }
}

impl Default for ImageInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormControl> ImageInput<C> {
    /// Creates an empty input reporting to `control` under `name`.
    pub fn bound(name: impl Into<String>, control: C) -> Self {
        Self::with_text(TextInput::bound(name, control))
    }

    /// Wraps a configured text input.
    ///
    /// Its change callback and error predicate keep working.
    pub fn with_text(text: TextInput<C>) -> Self {
        let url = text.value().to_owned();
        Self {
            text,
            label: None,
            url,
        }
    }

    /// Sets the label shown above the text input.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Applies the owner's current default and live values to the text input.
    ///
    /// Returns the number of pushes applied.
    pub fn sync(&mut self, default_value: Option<&str>, value: Option<&str>) -> usize {
        let applied = self.text.sync(default_value, value);
        if applied > 0 {
            self.follow_text();
        }
        applied
    }

    /// Handles a user edit of the URL.
    ///
    /// Returns `true` if the value was updated.
    pub fn input(&mut self, raw: &str) -> bool {
        let updated = self.text.input(raw);
        if updated {
            self.follow_text();
        }
        updated
    }

    /// Handles the preview image failing to load.
    pub fn on_load_error(&mut self) {
        if !self.url.is_empty() {
            log::debug!(target: "overstory_inputs", "image failed to load: {}", self.url);
        }
        self.url.clear();
    }

    fn follow_text(&mut self) {
        self.url.clear();
        self.url.push_str(self.text.value());
    }

    /// The URL to preview, if any.
    pub fn preview_url(&self) -> Option<&str> {
        (!self.url.is_empty()).then_some(self.url.as_str())
    }

    /// The formatted URL text.
    pub fn value(&self) -> &str {
        self.text.value()
    }

    /// Validation messages of the text input.
    pub fn errors(&self) -> Option<&ErrorMessages> {
        self.text.errors()
    }

    /// Status of the text input.
    pub fn status(&self) -> FieldStatus {
        self.text.status()
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The wrapped text input.
    pub fn text_input(&self) -> &TextInput<C> {
        &self.text
    }

    /// Mutable access to the wrapped text input.
    ///
    /// Edits made through it bypass the preview; use [`Self::input`] to keep
    /// both in step.
    pub fn text_input_mut(&mut self) -> &mut TextInput<C> {
        &mut self.text
    }
}
