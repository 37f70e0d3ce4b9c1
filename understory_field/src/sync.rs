// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled-value reconciliation.
//!
//! An input may be driven from outside by two independent values:
//!
//! - a **default** value, typically the initial value of a form being edited;
//! - a **live** value, pushed imperatively by the owner at any time.
//!
//! The hosting layer calls [`ParentController::reconcile`] with the current
//! pair every time the input's properties are (re)applied. Each value that
//! changed since the previous call and is non-empty comes back as a [`Push`];
//! the input runs its normal update path with it, overwriting whatever the
//! user had typed. The default push always comes before the live push.
//!
//! Empty values never produce a push. A parent therefore cannot clear a field
//! by setting its live value to `""`; the field keeps its text until the user
//! (or an explicit in-component action such as a clear button) empties it.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// Which external value produced a [`Push`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PushSource {
    /// The default value changed.
    Default,
    /// The live value changed.
    Value,
}

impl fmt::Display for PushSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default value",
            Self::Value => "value",
        })
    }
}

/// A value to run through the input's update path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Push<'a> {
    /// Where the value came from.
    pub source: PushSource,
    /// The pushed value; never empty.
    pub value: &'a str,
}

/// Pushes produced by one reconcile, in application order.
pub type Pushes<'a> = SmallVec<[Push<'a>; 2]>;

/// Last observed state of one external value.
#[derive(Clone, Debug, Default)]
struct Watch {
    observed: bool,
    last: Option<String>,
}

impl Watch {
    /// Records `next`, returning `true` if it differs from the last observation.
    ///
    /// The first observation always counts as a change.
    fn observe(&mut self, next: Option<&str>) -> bool {
        if self.observed && self.last.as_deref() == next {
            return false;
        }
        self.observed = true;
        self.last = next.map(String::from);
        true
    }
}

/// Reconciles the default and live values an owner pushes into an input.
#[derive(Clone, Debug, Default)]
pub struct ParentController {
    default_value: Watch,
    value: Watch,
}

impl ParentController {
    /// Creates a controller that has observed nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes the current external values and returns the pushes to apply.
    ///
    /// A value is pushed when it differs from the previous observation and is
    /// non-empty. The default push, if any, precedes the live push.
    pub fn reconcile<'a>(
        &mut self,
        default_value: Option<&'a str>,
        value: Option<&'a str>,
    ) -> Pushes<'a> {
        let mut pushes = Pushes::new();
        for (watch, source, next) in [
            (&mut self.default_value, PushSource::Default, default_value),
            (&mut self.value, PushSource::Value, value),
        ] {
            if !watch.observe(next) {
                continue;
            }
            match next {
                Some(value) if !value.is_empty() => pushes.push(Push { source, value }),
                _ => {
                    log::trace!(target: "understory_field", "ignoring empty {source} push");
                }
            }
        }
        pushes
    }

    /// The most recently observed default value.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.last.as_deref()
    }

    /// The most recently observed live value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.last.as_deref()
    }
}
