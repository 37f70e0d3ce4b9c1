// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use overstory_inputs::{AutocompleteSelect, SelectItem, filter_items};

fn items(len: usize) -> Vec<SelectItem> {
    (0..len)
        .map(|i| SelectItem::new(i.to_string(), format!("Município {i:05} de Pernambuco")))
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("autocomplete/filter");

    for len in [64usize, 1_024, 16_384] {
        let items = items(len);
        group.throughput(Throughput::Elements(len as u64));

        for search in ["", "pern", "00042", "xyz"] {
            group.bench_with_input(
                BenchmarkId::new(format!("search={search:?}"), len),
                &items,
                |b, items| {
                    b.iter(|| black_box(filter_items(items, black_box(search)).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("autocomplete/typing");
    let query = "município 0042";

    for len in [64usize, 1_024, 16_384] {
        let items = items(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || AutocompleteSelect::new(items.clone()),
                |mut input| {
                    let mut typed = String::new();
                    for ch in query.chars() {
                        typed.push(ch);
                        input.type_search(&typed);
                        black_box(input.filtered_items().len());
                    }
                    input
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_typing);
criterion_main!(benches);
