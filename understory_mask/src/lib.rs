// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_mask --heading-base-level=0

//! Understory Mask: the parse/format pipeline behind masked text fields.
//!
//! A masked field keeps two views of the same text:
//!
//! - The **parsed** value: the canonical representation, with disallowed
//!   characters stripped (for example only the digits of a phone number).
//! - The **formatted** value: what the user sees, with currency symbols,
//!   punctuation and grouping put back in.
//!
//! Every change, whether typed by the user or pushed from outside, goes through
//! the same two steps: `parsed = parse(raw)`, then `formatted = format(parsed)`.
//! The formatted value is then written back into the field, so the next
//! keystroke arrives as "formatted text plus one character" and the cycle
//! repeats.
//!
//! The crate provides:
//!
//! - [`ParseMode`]: built-in parse steps (`only-numbers`, `positive-negative-numbers`).
//! - [`FormatId`]: the closed set of built-in formats (currency, tax IDs, phone, ...).
//! - [`FormatterRegistry`]: the `FormatId → formatter` table, which callers may
//!   extend or override.
//! - [`Pipeline`]: the configured parse/format chain for one field, including
//!   optional caller-supplied parser and formatter functions.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_mask::{FormatId, ParseMode, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .with_parse(ParseMode::OnlyNumbers)
//!     .with_format(FormatId::Cpf);
//!
//! // The user has typed the formatted text plus one more digit.
//! let out = pipeline.run("123.456.7890");
//! assert_eq!(out.parsed, "1234567890");
//! assert_eq!(out.formatted, "123.456.789-0");
//! ```
//!
//! ## Partial masks
//!
//! Formatters never fail. Numeric masks read only the digits of their input,
//! place as many as are available, and emit a separator only in front of a
//! placed digit, so a half-typed value renders as a half-filled mask:
//!
//! ```rust
//! use understory_mask::{FormatId, FormatterRegistry};
//!
//! let registry = FormatterRegistry::builtin();
//! assert_eq!(registry.format(FormatId::Phone, "119"), Some("(11) 9".into()));
//! assert_eq!(registry.format(FormatId::CurrencyBrl, "5"), Some("R$ 0,05".into()));
//! assert_eq!(registry.format(FormatId::CurrencyBrl, ""), Some("".into()));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`FormatId`], [`ParseMode`]
//!   and [`MaskConfig`] using their kebab-case names.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod currency;
mod format;
mod masks;
mod parse;
mod pipeline;
mod registry;

pub use currency::{Currency, format_currency};
pub use format::{FormatId, UnknownFormatId};
pub use masks::{
    apply_digit_pattern, format_cep, format_cnpj, format_cpf, format_danfe_access_key,
    format_phone, format_rbna_certificate_number,
};
pub use parse::{ParseMode, UnknownParseMode, strip_line_breaks};
pub use pipeline::{MaskConfig, Pipeline, TransformFn, Transformed};
pub use registry::{FormatterFn, FormatterRegistry};
