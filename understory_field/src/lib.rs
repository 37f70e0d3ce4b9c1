// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_field --heading-base-level=0

//! Understory Field: the state every form input shares.
//!
//! Form inputs differ in how they turn user events into values, but they all
//! keep the same bookkeeping around that value:
//!
//! - A [`Field`]: the value buffer owned by the input, reported to an optional
//!   form-state [`FormControl`] under the field's name.
//! - A [`ParentController`]: reconciles two externally owned values, a
//!   *default* value and a *live* value, with user edits. Whenever either
//!   changes to a non-empty value, the input runs its update path with it.
//! - An [`ErrorState`]: the current validation messages, normalized from
//!   whatever a caller-supplied predicate returned via [`IntoErrorMessages`].
//! - A [`FieldStatus`]: idle, modified (differs from the default) or invalid,
//!   for hosting layers that style inputs by state.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_field::{ErrorState, Field, ParentController};
//!
//! let mut field = Field::standalone();
//! let mut parent = ParentController::new();
//! let mut errors = ErrorState::new();
//!
//! let mut update = |field: &mut Field, value: &str| {
//!     field.set(value);
//!     errors.apply(if value.len() < 3 { Some("too short") } else { None });
//! };
//!
//! // First render: the default value is applied.
//! for push in parent.reconcile(Some("ab"), None) {
//!     update(&mut field, push.value);
//! }
//! assert_eq!(field.value(), "ab");
//!
//! // The parent pushes a live value.
//! for push in parent.reconcile(Some("ab"), Some("abcd")) {
//!     update(&mut field, push.value);
//! }
//! assert_eq!(field.value(), "abcd");
//!
//! // An empty live value is ignored: the field keeps its text.
//! assert!(parent.reconcile(Some("ab"), Some("")).is_empty());
//! assert_eq!(field.value(), "abcd");
//! ```
//!
//! ## Sharing a form
//!
//! [`FormState`] records every named field. Share one between several inputs
//! through `Rc<RefCell<FormState>>`, which is itself a [`FormControl`]:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_field::{Field, FormState};
//!
//! let form = Rc::new(RefCell::new(FormState::new()));
//! let mut name = Field::bound("name", Rc::clone(&form));
//! let mut city = Field::bound("city", Rc::clone(&form));
//!
//! name.set("Ada");
//! city.set("London");
//!
//! let form = form.borrow();
//! assert_eq!(form.value("name"), Some("Ada"));
//! assert_eq!(form.value("city"), Some("London"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod control;
mod errors;
mod field;
mod sync;

pub use control::{FormControl, FormState, Standalone};
pub use errors::{ErrorMessages, ErrorState, IntoErrorMessages, normalize};
pub use field::{Field, FieldStatus};
pub use sync::{ParentController, Push, PushSource, Pushes};
