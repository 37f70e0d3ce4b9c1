// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_mask` pipeline.
//!
//! These follow a field through typical edits: each keystroke arrives as the
//! previous formatted text plus or minus one character.

use understory_mask::{FormatId, ParseMode, Pipeline};

fn masked(format: FormatId) -> Pipeline {
    Pipeline::new()
        .with_parse(ParseMode::OnlyNumbers)
        .with_format(format)
}

#[test]
fn only_numbers_example() {
    let pipeline = Pipeline::new().with_parse(ParseMode::OnlyNumbers);
    assert_eq!(pipeline.parse("a1b2c3"), "123");
}

#[test]
fn positive_negative_examples() {
    let pipeline = Pipeline::new().with_parse(ParseMode::PositiveNegativeNumbers);
    assert_eq!(pipeline.parse("-1-2-3"), "-123");
    assert_eq!(pipeline.parse("--12"), "12");
}

#[test]
fn currency_brl_reads_digits_as_cents() {
    let pipeline = masked(FormatId::CurrencyBrl);
    let out = pipeline.run("1234");
    assert_eq!(out.parsed, "1234");
    assert_eq!(out.formatted, "R$ 12,34");

    assert_eq!(pipeline.run("").formatted, "");
    assert_eq!(pipeline.run("7").formatted, "R$ 0,07");
}

#[test]
fn currency_typing_session() {
    let pipeline = masked(FormatId::CurrencyBrl);
    let mut display = String::new();
    for key in ['1', '2', '3', '4', '5'] {
        display.push(key);
        display = pipeline.run(&display).formatted;
    }
    assert_eq!(display, "R$ 123,45");

    // Backspace all the way down clears the field instead of sticking at zero.
    while !display.is_empty() {
        display.pop();
        display = pipeline.run(&display).formatted;
    }
    assert_eq!(display, "");
}

#[test]
fn signed_currency() {
    let pipeline = Pipeline::new()
        .with_parse(ParseMode::PositiveNegativeNumbers)
        .with_format(FormatId::CurrencyUsd);

    let out = pipeline.run("-$1,234.56");
    assert_eq!(out.parsed, "-123456");
    assert_eq!(out.formatted, "-$1,234.56");

    // Typing another dash flips the sign back.
    assert_eq!(pipeline.run("--$1,234.56").formatted, "$1,234.56");
}

#[test]
fn cpf_typing_session() {
    let pipeline = masked(FormatId::Cpf);
    let mut display = String::new();
    for key in "12345678901".chars() {
        display.push(key);
        display = pipeline.run(&display).formatted;
    }
    assert_eq!(display, "123.456.789-01");
}

#[test]
fn phone_switches_layout_on_eleventh_digit() {
    let pipeline = masked(FormatId::Phone);
    let ten = pipeline.run("(11) 2345-6789");
    assert_eq!(ten.formatted, "(11) 2345-6789");

    let eleven = pipeline.run("(11) 2345-67890");
    assert_eq!(eleven.parsed, "11234567890");
    assert_eq!(eleven.formatted, "(11) 23456-7890");
}

#[test]
fn pasted_text_with_line_breaks() {
    let pipeline = masked(FormatId::Cep);
    assert_eq!(pipeline.run("01310\n-100").formatted, "01310-100");
}

#[test]
fn formatters_are_total_on_odd_input() {
    let inputs = ["", "-", "x", "0", "\n\n", "ççç", "12345678901234567890123456789012345678901234567890"];
    for id in FormatId::ALL {
        let pipeline = Pipeline::new().with_format(id);
        for input in inputs {
            // Must not panic; output is irrelevant here.
            let _ = pipeline.run(input);
        }
    }
}

#[test]
fn danfe_access_key() {
    let pipeline = masked(FormatId::DanfeAccessKey);
    let key = "35240112345678000190550010000001231000001234";
    let out = pipeline.run(key);
    assert_eq!(
        out.formatted,
        "3524 0112 3456 7800 0190 5500 1000 0001 2310 0000 1234"
    );
    assert_eq!(out.parsed, key);
}
