// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The configured parse/format chain for one field.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::format::FormatId;
use crate::parse::{ParseMode, strip_line_breaks};
use crate::registry::FormatterRegistry;

/// A caller-supplied parser or formatter.
pub type TransformFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Output of one [`Pipeline::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transformed {
    /// The canonical value.
    pub parsed: String,
    /// The display value.
    pub formatted: String,
}

/// Serializable part of a pipeline configuration.
///
/// Function-valued options (custom parser and formatter) and the registry are
/// not part of it; add them to the [`Pipeline`] built from this config.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct MaskConfig {
    /// Built-in format applied after parsing.
    pub format: Option<FormatId>,
    /// Built-in parse mode.
    pub parse: Option<ParseMode>,
    /// Keep line breaks when `true`.
    pub multiline: bool,
}

/// Parse/format chain for one field.
///
/// `parse(raw)`:
/// 1. strip line breaks unless multiline,
/// 2. apply the built-in [`ParseMode`], if any,
/// 3. apply the custom parser, if any.
///
/// `format(parsed)`:
/// 1. apply the registry formatter for the [`FormatId`], if any (an id with no
///    registered formatter is identity),
/// 2. apply the custom formatter, if any.
///
/// With nothing configured both steps are identity, apart from line-break
/// stripping.
pub struct Pipeline {
    config: MaskConfig,
    parser: Option<TransformFn>,
    formatter: Option<TransformFn>,
    registry: FormatterRegistry,
}

impl Pipeline {
    /// Creates an identity pipeline backed by the built-in formatters.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(MaskConfig::default())
    }

    /// Creates a pipeline from its serializable configuration.
    #[must_use]
    pub fn from_config(config: MaskConfig) -> Self {
        Self {
            config,
            parser: None,
            formatter: None,
            registry: FormatterRegistry::builtin(),
        }
    }

    /// Sets the built-in format.
    #[must_use]
    pub fn with_format(mut self, id: FormatId) -> Self {
        self.config.format = Some(id);
        self
    }

    /// Sets the built-in format by name.
    ///
    /// An unknown name is logged and leaves the field unformatted.
    #[must_use]
    pub fn with_format_name(mut self, name: &str) -> Self {
        match name.parse::<FormatId>() {
            Ok(id) => self.config.format = Some(id),
            Err(err) => {
                log::warn!(target: "understory_mask", "{err}; formatting falls through to identity");
                self.config.format = None;
            }
        }
        self
    }

    /// Sets the built-in parse mode.
    #[must_use]
    pub fn with_parse(mut self, mode: ParseMode) -> Self {
        self.config.parse = Some(mode);
        self
    }

    /// Sets the built-in parse mode by name.
    ///
    /// An unknown name is logged and leaves parsing as identity.
    #[must_use]
    pub fn with_parse_name(mut self, name: &str) -> Self {
        match name.parse::<ParseMode>() {
            Ok(mode) => self.config.parse = Some(mode),
            Err(err) => {
                log::warn!(target: "understory_mask", "{err}; parsing falls through to identity");
                self.config.parse = None;
            }
        }
        self
    }

    /// Keeps line breaks when `multiline` is `true`.
    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.config.multiline = multiline;
        self
    }

    /// Sets the custom parser, applied after the built-in parse mode.
    #[must_use]
    pub fn with_parser(mut self, parser: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets the custom formatter, applied after the built-in format.
    #[must_use]
    pub fn with_formatter(
        mut self,
        formatter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Replaces the formatter registry.
    #[must_use]
    pub fn with_registry(mut self, registry: FormatterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The serializable configuration.
    #[must_use]
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Returns `true` if line breaks are kept.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.config.multiline
    }

    /// The formatter registry.
    #[must_use]
    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    /// Mutable access to the formatter registry.
    pub fn registry_mut(&mut self) -> &mut FormatterRegistry {
        &mut self.registry
    }

    /// Converts raw text into the canonical parsed value.
    #[must_use]
    pub fn parse(&self, raw: &str) -> String {
        let mut value = if self.config.multiline {
            String::from(raw)
        } else {
            strip_line_breaks(raw)
        };
        if let Some(mode) = self.config.parse {
            value = mode.apply(&value);
        }
        if let Some(parser) = &self.parser {
            value = parser(&value);
        }
        value
    }

    /// Converts a parsed value into display text.
    #[must_use]
    pub fn format(&self, parsed: &str) -> String {
        let mut value = match self.config.format {
            Some(id) => match self.registry.format(id, parsed) {
                Some(formatted) => formatted,
                None => {
                    log::debug!(target: "understory_mask", "no formatter registered for `{id}`");
                    String::from(parsed)
                }
            },
            None => String::from(parsed),
        };
        if let Some(formatter) = &self.formatter {
            value = formatter(&value);
        }
        value
    }

    /// Parses then formats `raw`.
    #[must_use]
    pub fn run(&self, raw: &str) -> Transformed {
        let parsed = self.parse(raw);
        let formatted = self.format(&parsed);
        log::trace!(target: "understory_mask", "{raw:?} -> {parsed:?} -> {formatted:?}");
        Transformed { parsed, formatted }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MaskConfig> for Pipeline {
    fn from(config: MaskConfig) -> Self {
        Self::from_config(config)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("parser", &self.parser.is_some())
            .field("formatter", &self.formatter.is_some())
            .field("registry", &self.registry)
            .finish()
    }
}
