// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_inputs --heading-base-level=0

//! Overstory Inputs: headless form inputs.
//!
//! Each input owns its state and exposes one method per event the hosting UI
//! forwards to it. Rendering is left to the host: it reads the state back
//! (display value, error messages, open/closed, [`FieldStatus`]) and draws
//! whatever markup it likes.
//!
//! | Input | Value | Events |
//! |---|---|---|
//! | [`TextInput`] | masked text via an [`understory_mask::Pipeline`] | `input` |
//! | [`DateInput`] | ISO-8601 UTC timestamp, displayed as `yyyy-mm-dd` | `input` |
//! | [`SelectInput`] | value of one [`SelectItem`] | `choose` |
//! | [`AutocompleteSelect`] | value of one [`SelectItem`], searched by label | `type_search`, `focus`, `blur`, `press_item`, `leave_item`, `click_item`, `clear` |
//! | [`ImageInput`] | image URL in a [`TextInput`], plus a preview URL | `input`, `on_load_error` |
//!
//! Every input also accepts:
//!
//! - `sync(default_value, value)`: the owner's current default and live
//!   values. Changed, non-empty values overwrite the input through its normal
//!   update path (see [`understory_field::ParentController`]).
//! - An error predicate, re-evaluated on every update, whose result is
//!   normalized by [`understory_field::IntoErrorMessages`].
//! - An optional form binding: construct with `bound(name, control)` to
//!   report every value to a [`FormControl`] such as [`FormState`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use overstory_inputs::{FormState, TextInput};
//! use understory_mask::{FormatId, ParseMode};
//!
//! let form = Rc::new(RefCell::new(FormState::new()));
//! let parsed = Rc::new(RefCell::new(String::new()));
//!
//! let sink = Rc::clone(&parsed);
//! let mut price = TextInput::bound("price", Rc::clone(&form))
//!     .with_parse(ParseMode::OnlyNumbers)
//!     .with_format(FormatId::CurrencyBrl)
//!     .on_change(move |value, _formatted| *sink.borrow_mut() = value.to_owned())
//!     .with_error_message(|_formatted: &str, parsed: &str| {
//!         (parsed.len() < 3).then_some("minimum R$ 1,00")
//!     });
//!
//! price.input("1");
//! assert_eq!(price.value(), "R$ 0,01");
//! assert_eq!(price.errors().unwrap().as_slice(), ["minimum R$ 1,00"]);
//!
//! price.input("150");
//! assert_eq!(price.value(), "R$ 1,50");
//! assert!(price.errors().is_none());
//! assert_eq!(*parsed.borrow(), "150");
//! assert_eq!(form.borrow().value("price"), Some("R$ 1,50"));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade under the `overstory_inputs`
//! target. Nothing is logged above `debug` in normal operation.

mod autocomplete;
mod date;
mod image;
mod item;
mod select;
mod text;

pub use autocomplete::{
    AUTOCOMPLETE_PLACEHOLDER, AutocompleteSelect, NO_RESULTS_MESSAGE, filter_items,
};
pub use date::{DateInput, date_part, date_to_iso};
pub use image::ImageInput;
pub use item::SelectItem;
pub use select::{SELECT_PLACEHOLDER, SelectInput};
pub use text::{TEXT_PLACEHOLDER, TextInput};

pub use understory_field::{
    ErrorMessages, Field, FieldStatus, FormControl, FormState, IntoErrorMessages, Standalone,
};

/// Predicate over a single value, already normalized.
type ErrorFn = Box<dyn Fn(&str) -> Option<ErrorMessages>>;

fn error_fn<R, F>(predicate: F) -> ErrorFn
where
    R: IntoErrorMessages,
    F: Fn(&str) -> R + 'static,
{
    Box::new(move |value| predicate(value).into_error_messages())
}
