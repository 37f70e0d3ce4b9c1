// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatter registry: `FormatId → formatter` dispatch.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashMap;

use crate::currency::{Currency, format_currency};
use crate::format::FormatId;
use crate::masks;

/// A formatter: total function from parsed text to display text.
pub type FormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Table of formatters keyed by [`FormatId`].
///
/// [`FormatterRegistry::builtin`] registers every built-in format. Entries can be
/// replaced with [`FormatterRegistry::register`], for example to render currency
/// differently, or removed, in which case that format falls through to identity.
///
/// Cloning a registry is cheap: formatters are reference counted.
///
/// ```rust
/// use std::sync::Arc;
/// use understory_mask::{FormatId, FormatterRegistry};
///
/// let mut registry = FormatterRegistry::builtin();
/// registry.register(FormatId::Cep, Arc::new(|s: &str| s.replace(|c: char| !c.is_ascii_digit(), "")));
///
/// assert_eq!(registry.format(FormatId::Cep, "12345-678"), Some("12345678".into()));
/// assert_eq!(registry.format(FormatId::Cpf, "123456"), Some("123.456".into()));
/// ```
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: HashMap<FormatId, FormatterFn>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in format registered.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for id in FormatId::ALL {
            registry.register(id, builtin_formatter(id));
        }
        registry
    }

    /// Registers `formatter` for `id`, returning the formatter it replaces.
    pub fn register(&mut self, id: FormatId, formatter: FormatterFn) -> Option<FormatterFn> {
        self.formatters.insert(id, formatter)
    }

    /// Removes the formatter for `id`.
    pub fn unregister(&mut self, id: FormatId) -> Option<FormatterFn> {
        self.formatters.remove(&id)
    }

    /// Returns `true` if a formatter is registered for `id`.
    #[must_use]
    pub fn contains(&self, id: FormatId) -> bool {
        self.formatters.contains_key(&id)
    }

    /// Returns the formatter registered for `id`.
    #[must_use]
    pub fn get(&self, id: FormatId) -> Option<&FormatterFn> {
        self.formatters.get(&id)
    }

    /// Formats `input` with the formatter registered for `id`.
    ///
    /// Returns `None` when no formatter is registered.
    #[must_use]
    pub fn format(&self, id: FormatId, input: &str) -> Option<String> {
        self.formatters.get(&id).map(|f| f(input))
    }

    /// Number of registered formatters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Returns `true` if no formatter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}

fn builtin_formatter(id: FormatId) -> FormatterFn {
    match id {
        FormatId::CurrencyBrl => Arc::new(|s: &str| format_currency(s, Currency::Brl)),
        FormatId::CurrencyUsd => Arc::new(|s: &str| format_currency(s, Currency::Usd)),
        FormatId::Cpf => Arc::new(masks::format_cpf),
        FormatId::Cnpj => Arc::new(masks::format_cnpj),
        FormatId::Phone => Arc::new(masks::format_phone),
        FormatId::Cep => Arc::new(masks::format_cep),
        FormatId::RbnaCertificateNumber => Arc::new(masks::format_rbna_certificate_number),
        FormatId::DanfeAccessKey => Arc::new(masks::format_danfe_access_key),
    }
}
