// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to run the summation strategies.

use clap::{Parser, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::hint::black_box;
use tallybench::pinning::{pin_current_thread, PinningPolicy};
use tallybench::{Addr, Sequence, WordStore};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    pin_current_thread(match cli.pinning {
        PinningPolicyCli::No => PinningPolicy::No,
        PinningPolicyCli::IfSupported => PinningPolicy::IfSupported,
        PinningPolicyCli::Always => PinningPolicy::Always,
    });

    let base = match cli.base_slot {
        Some(slot) => Addr::new(slot),
        None => {
            // An arbitrary base slot, fixed by a constant seed for
            // reproducibility.
            let mut rng = ChaCha12Rng::seed_from_u64(cli.base_seed);
            Addr::new(rng.next_u64())
        }
    };

    let mut store = WordStore::new();
    let sequence = match Sequence::build(&mut store, base, cli.input_size) {
        Ok(sequence) => sequence,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let strategy: fn(&WordStore, &Sequence) -> u64 = match cli.strategy {
        Strategy::StoreChecked => tallybench::sum_store_checked,
        Strategy::WorkspaceChecked => tallybench::sum_workspace_checked,
        Strategy::WorkspaceUncheckedCounter => tallybench::sum_workspace_unchecked_counter,
        Strategy::WorkspaceRaw => tallybench::sum_workspace_raw,
        Strategy::StoreDirect => tallybench::sum_store_direct,
    };

    let sum = strategy(black_box(&store), black_box(&sequence));
    println!("sum = {sum}");
}

/// CLI tool to run the summation strategies.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Summation strategy to run.
    #[arg(long, value_enum)]
    strategy: Strategy,

    /// Number of elements in the sequence.
    #[arg(long, default_value_t = 1_000_000)]
    input_size: u64,

    /// Base slot to anchor the sequence at. Defaults to a slot derived from
    /// the base seed.
    #[arg(long)]
    base_slot: Option<u64>,

    /// Seed for drawing the base slot when none is given explicitly.
    #[arg(long, default_value_t = 42)]
    base_seed: u64,

    /// Policy to pin the thread to a CPU.
    #[arg(long, value_enum, default_value = "if-supported")]
    pinning: PinningPolicyCli,
}

/// Summation strategy to run.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Strategy {
    /// Read each element from the store through the checked accessor.
    StoreChecked,
    /// Copy into a workspace, then iterate with checked arithmetic.
    WorkspaceChecked,
    /// Copy into a workspace, increment the counter without overflow checks.
    WorkspaceUncheckedCounter,
    /// Copy into a workspace, read elements from raw computed addresses.
    WorkspaceRaw,
    /// Read computed store addresses directly, with no workspace.
    StoreDirect,
}

/// Policy to pin the thread to a CPU.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PinningPolicyCli {
    /// Don't pin.
    No,
    /// Pin if the platform supports it.
    IfSupported,
    /// Pin, and fail if the platform doesn't support it.
    Always,
}
