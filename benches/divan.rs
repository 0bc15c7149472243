// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use tallybench::pinning::{pin_current_thread, PinningPolicy};

fn main() {
    pin_current_thread(PinningPolicy::IfSupported);
    divan::main();
}

const LENGTHS: &[usize] = &[10_000, 100_000, 1_000_000];

/// Baseline benchmark summing a plain slice with the standard library.
mod baseline {
    use super::LENGTHS;
    use divan::counter::BytesCount;
    use divan::{black_box, Bencher};

    #[divan::bench(args = LENGTHS)]
    fn sum_slice(bencher: Bencher, len: usize) {
        let input = (0..len as u64).map(|i| i % 10).collect::<Vec<u64>>();
        let input_slice = input.as_slice();
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| black_box(input_slice).iter().sum::<u64>())
    }
}

/// Benchmarks of the summation strategies.
mod strategies {
    use super::LENGTHS;
    use divan::counter::BytesCount;
    use divan::{black_box, Bencher};
    use tallybench::{Addr, Sequence, WordStore};

    #[divan::bench(args = LENGTHS)]
    fn store_checked(bencher: Bencher, len: usize) {
        sum_impl(bencher, len, tallybench::sum_store_checked)
    }

    #[divan::bench(args = LENGTHS)]
    fn workspace_checked(bencher: Bencher, len: usize) {
        sum_impl(bencher, len, tallybench::sum_workspace_checked)
    }

    #[divan::bench(args = LENGTHS)]
    fn workspace_unchecked_counter(bencher: Bencher, len: usize) {
        sum_impl(bencher, len, tallybench::sum_workspace_unchecked_counter)
    }

    #[divan::bench(args = LENGTHS)]
    fn workspace_raw(bencher: Bencher, len: usize) {
        sum_impl(bencher, len, tallybench::sum_workspace_raw)
    }

    #[divan::bench(args = LENGTHS)]
    fn store_direct(bencher: Bencher, len: usize) {
        sum_impl(bencher, len, tallybench::sum_store_direct)
    }

    fn sum_impl(bencher: Bencher, len: usize, strategy: fn(&WordStore, &Sequence) -> u64) {
        let mut store = WordStore::new();
        let sequence = Sequence::build(&mut store, Addr::new(3), len as u64)
            .expect("benchmark length is within bounds");
        bencher
            .counter(BytesCount::of_many::<u64>(len))
            .bench_local(|| strategy(black_box(&store), black_box(&sequence)))
    }
}
