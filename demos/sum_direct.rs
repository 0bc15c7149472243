// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple program that sums a sequence by reading computed store addresses
//! directly, with no intermediate workspace.

use std::hint::black_box;
use tallybench::{sum_store_direct, Addr, Sequence, WordStore};

fn main() {
    let input_size = 1_000_000;

    let mut store = WordStore::new();
    let sequence = Sequence::build(&mut store, Addr::new(3), input_size)
        .expect("input size is within bounds");
    let sum = sum_store_direct(black_box(&store), black_box(&sequence));
    println!("sum = {sum}");
}
