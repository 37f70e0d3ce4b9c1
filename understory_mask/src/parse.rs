// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in parse steps.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// A built-in parse step applied to raw field text.
///
/// Both modes are idempotent: parsing an already parsed value returns it
/// unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ParseMode {
    /// Keep ASCII digits only.
    OnlyNumbers,
    /// Keep ASCII digits, then prepend a single `-` when the input contained an
    /// odd number of dashes.
    ///
    /// Typing `-` toggles the sign wherever the cursor is, and a lone `-`
    /// survives so a sign can be typed before the first digit.
    PositiveNegativeNumbers,
}

impl ParseMode {
    /// Every parse mode, in declaration order.
    pub const ALL: [Self; 2] = [Self::OnlyNumbers, Self::PositiveNegativeNumbers];

    /// The kebab-case name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlyNumbers => "only-numbers",
            Self::PositiveNegativeNumbers => "positive-negative-numbers",
        }
    }

    /// Applies this mode to `input`.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::OnlyNumbers => digits(input),
            Self::PositiveNegativeNumbers => {
                let negative = input.chars().filter(|&c| c == '-').count() % 2 == 1;
                let digits = digits(input);
                if negative {
                    let mut out = String::with_capacity(digits.len() + 1);
                    out.push('-');
                    out.push_str(&digits);
                    out
                } else {
                    digits
                }
            }
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not match any [`ParseMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown parse mode `{name}`")]
pub struct UnknownParseMode {
    /// The name that failed to match.
    pub name: String,
}

impl FromStr for ParseMode {
    type Err = UnknownParseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownParseMode { name: s.into() })
    }
}

/// Removes every line-break character (`\n` and `\r`) from `input`.
#[must_use]
pub fn strip_line_breaks(input: &str) -> String {
    input.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

pub(crate) fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_numbers_drops_everything_else() {
        assert_eq!(ParseMode::OnlyNumbers.apply("a1b2c3"), "123");
        assert_eq!(ParseMode::OnlyNumbers.apply("R$ 1.234,56"), "123456");
        assert_eq!(ParseMode::OnlyNumbers.apply(""), "");
    }

    #[test]
    fn dash_parity_decides_the_sign() {
        let mode = ParseMode::PositiveNegativeNumbers;
        assert_eq!(mode.apply("-1-2-3"), "-123");
        assert_eq!(mode.apply("--12"), "12");
        assert_eq!(mode.apply("12-"), "-12");
        assert_eq!(mode.apply("-"), "-");
        assert_eq!(mode.apply("--"), "");
    }

    #[test]
    fn names_round_trip() {
        for mode in ParseMode::ALL {
            assert_eq!(mode.as_str().parse::<ParseMode>(), Ok(mode));
        }
        assert_eq!(
            "numbers".parse::<ParseMode>(),
            Err(UnknownParseMode {
                name: "numbers".into()
            })
        );
    }

    #[test]
    fn strip_line_breaks_handles_crlf() {
        assert_eq!(strip_line_breaks("a\r\nb\nc\r"), "abc");
    }
}
