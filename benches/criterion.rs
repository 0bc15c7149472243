// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::mem::size_of;
use tallybench::pinning::{pin_current_thread, PinningPolicy};
use tallybench::{Sequence, WordStore};

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000];

/// A summation strategy under benchmark.
type Strategy = fn(&WordStore, &Sequence) -> u64;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("store_checked", tallybench::sum_store_checked),
    ("workspace_checked", tallybench::sum_workspace_checked),
    (
        "workspace_unchecked_counter",
        tallybench::sum_workspace_unchecked_counter,
    ),
    ("workspace_raw", tallybench::sum_workspace_raw),
    ("store_direct", tallybench::sum_store_direct),
];

fn sum(c: &mut Criterion) {
    pin_current_thread(PinningPolicy::IfSupported);

    let mut group = c.benchmark_group("sum");
    for len in LENGTHS {
        group.throughput(Throughput::Bytes((len * size_of::<u64>()) as u64));
        group.bench_with_input(BenchmarkId::new("slice_serial", len), len, baseline::sum);
        for (name, strategy) in STRATEGIES {
            group.bench_with_input(BenchmarkId::new(*name, len), len, |bencher, len| {
                strategies::sum(bencher, *strategy, len)
            });
        }
    }
    group.finish();
}

/// Baseline benchmark summing a plain slice with the standard library.
mod baseline {
    use criterion::{black_box, Bencher};

    pub fn sum(bencher: &mut Bencher, len: &usize) {
        let input = (0..*len as u64).map(|i| i % 10).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher.iter(|| black_box(input_slice).iter().sum::<u64>());
    }
}

/// Benchmarks of the summation strategies.
mod strategies {
    use criterion::{black_box, Bencher};
    use tallybench::{Addr, Sequence, WordStore};

    pub fn sum(bencher: &mut Bencher, strategy: fn(&WordStore, &Sequence) -> u64, len: &usize) {
        let mut store = WordStore::new();
        let sequence = Sequence::build(&mut store, Addr::new(3), *len as u64)
            .expect("benchmark length is within bounds");
        bencher.iter(|| strategy(black_box(&store), black_box(&sequence)));
    }
}

criterion_group!(benches, sum);
criterion_main!(benches);
