// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_mask::{FormatId, ParseMode, Pipeline};

/// Keystroke-like input: digits interleaved with the punctuation a mask adds.
fn typed(len: usize) -> String {
    (0..len)
        .map(|i| match i % 4 {
            3 => '.',
            _ => char::from(b'1' + (i % 9) as u8),
        })
        .collect()
}

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask/run");

    for id in FormatId::ALL {
        let pipeline = Pipeline::new()
            .with_parse(ParseMode::OnlyNumbers)
            .with_format(id);
        for len in [8usize, 64, 1_024] {
            let raw = typed(len);
            group.throughput(Throughput::Bytes(len as u64));
            group.bench_with_input(BenchmarkId::new(id.as_str(), len), &raw, |b, raw| {
                b.iter(|| black_box(pipeline.run(black_box(raw))));
            });
        }
    }

    group.finish();
}

fn bench_typing_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask/typing");

    // Every prefix of a full value, as produced one keystroke at a time.
    for (id, full) in [
        (FormatId::Cpf, "12345678901"),
        (FormatId::Phone, "81912345678"),
        (FormatId::CurrencyBrl, "123456789012"),
    ] {
        let pipeline = Pipeline::new()
            .with_parse(ParseMode::OnlyNumbers)
            .with_format(id);
        group.throughput(Throughput::Elements(full.len() as u64));
        group.bench_function(id.as_str(), |b| {
            b.iter(|| {
                let mut shown = String::new();
                for ch in full.chars() {
                    shown.push(ch);
                    shown = pipeline.run(black_box(&shown)).formatted;
                }
                black_box(shown)
            });
        });
    }

    group.finish();
}

fn bench_parse_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask/parse");
    let raw = "-R$ 1.234.567,89\n".repeat(64);
    group.throughput(Throughput::Bytes(raw.len() as u64));

    for mode in ParseMode::ALL {
        let pipeline = Pipeline::new().with_parse(mode);
        group.bench_with_input(BenchmarkId::from_parameter(mode), &raw, |b, raw| {
            b.iter(|| black_box(pipeline.parse(black_box(raw))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formats, bench_typing_session, bench_parse_modes);
criterion_main!(benches);
