// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-pattern digit masks.
//!
//! A pattern is a string where `#` marks a digit slot and every other
//! character is a literal separator. [`apply_digit_pattern`] fills slots
//! left to right:
//!
//! - Only ASCII digits of the input are used; anything else is skipped.
//! - Literals are written only when a digit follows them, so `"12"` under
//!   `"###.###"` renders as `"12"`, not `"12."` or `"12 ."`.
//! - Digits left over once the pattern is full are appended as-is.
//!
//! The last rule keeps masks lossless: parsing the output back with
//! [`ParseMode::OnlyNumbers`](crate::ParseMode::OnlyNumbers) yields the input
//! digits exactly.

use alloc::string::String;

const CPF: &str = "###.###.###-##";
const CNPJ: &str = "##.###.###/####-##";
const PHONE_LANDLINE: &str = "(##) ####-####";
const PHONE_MOBILE: &str = "(##) #####-####";
const CEP: &str = "#####-###";
const RBNA_CERTIFICATE_NUMBER: &str = "###.###.###/####";

const DANFE_ACCESS_KEY_DIGITS: usize = 44;
const DANFE_GROUP: usize = 4;

/// Fills the `#` slots of `pattern` with the ASCII digits of `input`.
///
/// See the [module documentation](self) for the exact rules.
#[must_use]
pub fn apply_digit_pattern(input: &str, pattern: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());
    let mut pending = String::new();

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '#' {
            out.push_str(&pending);
            pending.clear();
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            pending.push(slot);
        }
    }

    out.extend(digits);
    out
}

/// Formats an individual taxpayer registry number (`###.###.###-##`).
#[must_use]
pub fn format_cpf(input: &str) -> String {
    apply_digit_pattern(input, CPF)
}

/// Formats a company taxpayer registry number (`##.###.###/####-##`).
#[must_use]
pub fn format_cnpj(input: &str) -> String {
    apply_digit_pattern(input, CNPJ)
}

/// Formats a phone number with area code.
///
/// Up to ten digits use the landline layout `(##) ####-####`; eleven or more
/// switch to the mobile layout `(##) #####-####`.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let count = input.chars().filter(char::is_ascii_digit).count();
    let pattern = if count <= 10 {
        PHONE_LANDLINE
    } else {
        PHONE_MOBILE
    };
    apply_digit_pattern(input, pattern)
}

/// Formats a postal code (`#####-###`).
#[must_use]
pub fn format_cep(input: &str) -> String {
    apply_digit_pattern(input, CEP)
}

/// Formats a certificate number (`###.###.###/####`).
#[must_use]
pub fn format_rbna_certificate_number(input: &str) -> String {
    apply_digit_pattern(input, RBNA_CERTIFICATE_NUMBER)
}

/// Formats an electronic invoice access key as eleven groups of four digits.
#[must_use]
pub fn format_danfe_access_key(input: &str) -> String {
    let mut out = String::with_capacity(DANFE_ACCESS_KEY_DIGITS + DANFE_ACCESS_KEY_DIGITS / 4);
    for (idx, d) in input.chars().filter(char::is_ascii_digit).enumerate() {
        if idx > 0 && idx < DANFE_ACCESS_KEY_DIGITS && idx % DANFE_GROUP == 0 {
            out.push(' ');
        }
        out.push(d);
    }
    out
}
