// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation message normalization.
//!
//! Inputs accept a caller-supplied predicate that inspects the current value
//! and may return nothing, one message, or several. [`IntoErrorMessages`]
//! collapses all of those shapes into `Option<ErrorMessages>`:
//!
//! | Predicate result | Normalized |
//! |---|---|
//! | `()`, `None`, `""`, empty list | `None` |
//! | `"x"` | `Some(["x"])` |
//! | `["a", "b"]` | `Some(["a", "b"])`, order kept |

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use smallvec::SmallVec;

/// A non-empty, ordered list of validation messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorMessages(SmallVec<[String; 2]>);

impl ErrorMessages {
    /// A single message.
    #[must_use]
    pub fn one(message: impl Into<String>) -> Self {
        let mut messages = SmallVec::new();
        messages.push(message.into());
        Self(messages)
    }

    /// Collects `messages`, returning `None` when there are none.
    pub fn collect<I>(messages: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let messages: SmallVec<[String; 2]> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    /// The messages, in the order the predicate produced them.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The first message.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.0[0]
    }
}

impl Deref for ErrorMessages {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ErrorMessages {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Conversion from a predicate result into normalized messages.
pub trait IntoErrorMessages {
    /// Normalizes `self`; `None` means "no errors".
    fn into_error_messages(self) -> Option<ErrorMessages>;
}

/// Normalizes a predicate result.
pub fn normalize(outcome: impl IntoErrorMessages) -> Option<ErrorMessages> {
    outcome.into_error_messages()
}

impl IntoErrorMessages for () {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        None
    }
}

impl<T: IntoErrorMessages> IntoErrorMessages for Option<T> {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        self.and_then(IntoErrorMessages::into_error_messages)
    }
}

impl IntoErrorMessages for ErrorMessages {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        Some(self)
    }
}

impl IntoErrorMessages for &str {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        (!self.is_empty()).then(|| ErrorMessages::one(self))
    }
}

impl IntoErrorMessages for String {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        (!self.is_empty()).then(|| ErrorMessages::one(self))
    }
}

impl<S: Into<String>> IntoErrorMessages for Vec<S> {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        ErrorMessages::collect(self)
    }
}

impl<S: Into<String>, const N: usize> IntoErrorMessages for [S; N] {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        ErrorMessages::collect(self)
    }
}

impl<S: AsRef<str>> IntoErrorMessages for &[S] {
    fn into_error_messages(self) -> Option<ErrorMessages> {
        ErrorMessages::collect(self.iter().map(|s| String::from(s.as_ref())))
    }
}

/// The current validation state of an input.
///
/// Replaced wholesale on every value update; there is no merging or
/// debouncing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: Option<ErrorMessages>,
}

impl ErrorState {
    /// Creates a state with no errors.
    #[must_use]
    pub const fn new() -> Self {
        Self { messages: None }
    }

    /// Replaces the state with the normalized `outcome`.
    ///
    /// Returns `true` if the messages changed.
    pub fn apply(&mut self, outcome: impl IntoErrorMessages) -> bool {
        let next = outcome.into_error_messages();
        if next == self.messages {
            return false;
        }
        self.messages = next;
        true
    }

    /// Clears all messages.
    pub fn clear(&mut self) {
        self.messages = None;
    }

    /// The current messages, if any.
    #[must_use]
    pub fn messages(&self) -> Option<&ErrorMessages> {
        self.messages.as_ref()
    }

    /// Returns `true` when at least one message is present.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn falsy_results_mean_no_errors() {
        assert_eq!(normalize(()), None);
        assert_eq!(normalize(None::<&str>), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(String::new()), None);
        assert_eq!(normalize(Vec::<String>::new()), None);
    }

    #[test]
    fn single_message_becomes_singleton() {
        let messages = normalize("x").unwrap();
        assert_eq!(messages.as_slice(), ["x"]);
        assert_eq!(messages.first(), "x");
    }

    #[test]
    fn lists_keep_their_order() {
        let messages = normalize(vec!["a", "b"]).unwrap();
        assert_eq!(messages.as_slice(), ["a", "b"]);

        let messages = normalize(["z", "y", "x"]).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], "z");
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut state = ErrorState::new();
        assert!(!state.apply(None::<&str>));
        assert!(state.apply("required"));
        assert!(!state.apply("required"));
        assert!(state.has_errors());
        assert!(state.apply(()));
        assert!(!state.has_errors());
    }
}
