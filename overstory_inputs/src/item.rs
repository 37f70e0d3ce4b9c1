// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One option of a select-style input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectItem {
    /// The value committed to the field.
    pub value: String,
    /// The text shown to the user and matched by searches.
    pub label: String,
}

impl SelectItem {
    /// Creates an item.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectItem {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// Label of the first item whose value is `value`.
pub(crate) fn label_of<'a>(items: &'a [SelectItem], value: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.value == value)
        .map(|item| item.label.as_str())
}
