// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Currency formatting with digits read as cents.

use alloc::string::String;

/// A currency supported by [`format_currency`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Brazilian real: `R$ 1.234,56`.
    Brl,
    /// US dollar: `$1,234.56`.
    Usd,
}

impl Currency {
    /// The currency symbol, including any trailing space.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$ ",
            Self::Usd => "$",
        }
    }

    /// Thousands separator.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::Brl => '.',
            Self::Usd => ',',
        }
    }

    /// Separator between units and cents.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::Brl => ',',
            Self::Usd => '.',
        }
    }
}

/// Formats the digits of `input` as an amount in cents.
///
/// - A leading `-` (as produced by
///   [`ParseMode::PositiveNegativeNumbers`](crate::ParseMode::PositiveNegativeNumbers))
///   marks a negative amount.
/// - Other non-digit characters are ignored.
/// - Leading zeros are dropped; an empty or all-zero amount formats to `""`, or
///   to `"-"` when only the sign was typed. This lets the user erase the field
///   with backspace instead of getting stuck on `R$ 0,00`.
/// - Shorter amounts are padded to one unit digit and two cent digits.
///
/// ```rust
/// use understory_mask::{Currency, format_currency};
///
/// assert_eq!(format_currency("123456", Currency::Brl), "R$ 1.234,56");
/// assert_eq!(format_currency("-5", Currency::Usd), "-$0.05");
/// assert_eq!(format_currency("000", Currency::Usd), "");
/// ```
#[must_use]
pub fn format_currency(input: &str, currency: Currency) -> String {
    let negative = input.trim_start().starts_with('-');
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .collect();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if digits.is_empty() {
        return out;
    }

    let padded = if digits.len() < 3 {
        let mut padded = String::with_capacity(3);
        padded.extend(core::iter::repeat_n('0', 3 - digits.len()));
        padded.push_str(&digits);
        padded
    } else {
        digits
    };
    let (units, cents) = padded.split_at(padded.len() - 2);

    out.push_str(currency.symbol());
    for (idx, d) in units.chars().enumerate() {
        if idx > 0 && (units.len() - idx) % 3 == 0 {
            out.push(currency.group_separator());
        }
        out.push(d);
    }
    out.push(currency.decimal_separator());
    out.push_str(cents);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_cents() {
        assert_eq!(format_currency("1234", Currency::Brl), "R$ 12,34");
        assert_eq!(format_currency("1234", Currency::Usd), "$12.34");
    }

    #[test]
    fn short_amounts_are_padded() {
        assert_eq!(format_currency("5", Currency::Brl), "R$ 0,05");
        assert_eq!(format_currency("56", Currency::Brl), "R$ 0,56");
        assert_eq!(format_currency("0056", Currency::Brl), "R$ 0,56");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency("100000", Currency::Brl), "R$ 1.000,00");
        assert_eq!(
            format_currency("123456789012", Currency::Usd),
            "$1,234,567,890.12"
        );
    }

    #[test]
    fn empty_and_zero_amounts_are_blank() {
        assert_eq!(format_currency("", Currency::Brl), "");
        assert_eq!(format_currency("00", Currency::Brl), "");
        assert_eq!(format_currency("-", Currency::Brl), "-");
        assert_eq!(format_currency("R$ ", Currency::Brl), "");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_currency("-1234", Currency::Brl), "-R$ 12,34");
    }
}
