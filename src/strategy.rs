// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The five summation strategies.
//!
//! All five read the same sequence and return the same sum; they differ only
//! in which tier they read from, how element addresses are obtained, and
//! which arithmetic checks they carry. From the safest to the cheapest:
//!
//! 1. [`sum_store_checked`] reads every element from the persistent store
//!    through the bounds-checked accessor.
//! 2. [`sum_workspace_checked`] bulk-copies the sequence into a workspace
//!    first, then iterates over cheap local reads.
//! 3. [`sum_workspace_unchecked_counter`] additionally drops the overflow
//!    check on the loop counter.
//! 4. [`sum_workspace_raw`] additionally bypasses the workspace's
//!    bounds-checked accessor in favor of computed element addresses.
//! 5. [`sum_store_direct`] skips the workspace and reads computed persistent
//!    addresses directly, with no checks anywhere in the loop.
//!
//! The unchecked variants are in contract only for sequences accepted by
//! [`Sequence::build`], which caps the length so that the sum provably fits
//! the accumulator; lengths beyond that cap are rejected at construction and
//! out of contract here.

use crate::address::element_base;
use crate::store::{Sequence, WordStore};
use crate::workspace::Workspace;

/// Sums the sequence by reading each element from the persistent store.
///
/// Every iteration goes through the store's bounds-checked accessor, which
/// re-reads the length header and re-derives the element region's address, so
/// every access pays the full per-read cost of the persistent tier. Both the
/// accumulator and the loop counter use checked arithmetic. This is the
/// baseline the other strategies are measured against.
///
/// ```
/// use tallybench::{sum_store_checked, Addr, Sequence, WordStore};
///
/// let mut store = WordStore::new();
/// let sequence = Sequence::build(&mut store, Addr::new(3), 22)?;
/// assert_eq!(sum_store_checked(&store, &sequence), 91);
/// # Ok::<(), tallybench::BuildError>(())
/// ```
pub fn sum_store_checked(store: &WordStore, sequence: &Sequence) -> u64 {
    let len = sequence.len(store);
    let mut total: u64 = 0;
    let mut i: u64 = 0;
    while i < len {
        total = total
            .checked_add(sequence.get(store, i))
            .expect("sum overflowed the accumulator");
        i = i.checked_add(1).expect("loop counter overflowed");
    }
    total
}

/// Sums the sequence from a freshly copied workspace.
///
/// The sequence is bulk-copied into a workspace once, collapsing many small
/// persistent reads into a single pass; the iteration then runs over cheap
/// local reads. The copy has a one-time price, but sequential local reads
/// amortize it. Checked arithmetic throughout, as in [`sum_store_checked`].
pub fn sum_workspace_checked(store: &WordStore, sequence: &Sequence) -> u64 {
    let workspace = Workspace::copy_from(store, sequence);
    let len = workspace.len();
    let mut total: u64 = 0;
    let mut i: usize = 0;
    while i < len {
        total = total
            .checked_add(workspace.get(i))
            .expect("sum overflowed the accumulator");
        i = i.checked_add(1).expect("loop counter overflowed");
    }
    total
}

/// Sums the sequence from a copied workspace, with an unchecked loop counter.
///
/// Identical to [`sum_workspace_checked`], except that the counter increment
/// carries no overflow instrumentation: the counter is bounded above by the
/// workspace length, so the increment provably cannot overflow. The removal
/// is sound by construction, not by omission, and the accumulator stays
/// checked.
pub fn sum_workspace_unchecked_counter(store: &WordStore, sequence: &Sequence) -> u64 {
    let workspace = Workspace::copy_from(store, sequence);
    let len = workspace.len();
    let mut total: u64 = 0;
    let mut i: usize = 0;
    while i < len {
        total = total
            .checked_add(workspace.get(i))
            .expect("sum overflowed the accumulator");
        // SAFETY: `i < len`, so `i + 1` cannot exceed `len` and in particular
        // cannot overflow.
        i = unsafe { i.unchecked_add(1) };
    }
    total
}

/// Sums the sequence from a copied workspace, through raw computed element
/// addresses.
///
/// Identical intent to [`sum_workspace_unchecked_counter`], but element
/// access bypasses the workspace's bounds-checked accessor entirely: each
/// element is read from its computed address with no bounds verification.
/// The read is only sound because the loop condition independently guarantees
/// `i < len`; the accessor's safety net is traded away for its cost.
pub fn sum_workspace_raw(store: &WordStore, sequence: &Sequence) -> u64 {
    let workspace = Workspace::copy_from(store, sequence);
    let len = workspace.len();
    let mut total: u64 = 0;
    let mut i: usize = 0;
    while i < len {
        // SAFETY: `i < len`, where `len` is this workspace's length.
        let element = unsafe { workspace.get_unchecked(i) };
        total = total
            .checked_add(element)
            .expect("sum overflowed the accumulator");
        // SAFETY: `i < len`, so `i + 1` cannot exceed `len` and in particular
        // cannot overflow.
        i = unsafe { i.unchecked_add(1) };
    }
    total
}

/// Sums the sequence straight from computed persistent addresses.
///
/// The element region's base address is derived once, with the same hashing
/// scheme used at construction; the length is read once from the header
/// address; and the loop then reads `element base + i` directly from the
/// store, with no bounds or overflow checks anywhere. When direct computed
/// addressing is available and a persistent read is not prohibitively more
/// expensive than a local one, copying into a workspace first is pure
/// overhead, so this variant is expected to be the cheapest of the five.
///
/// The accumulation wraps instead of checking: elements of a built sequence
/// are below [`ELEMENT_MODULUS`](crate::ELEMENT_MODULUS) and the length was
/// validated against [`MAX_SEQUENCE_LEN`](crate::MAX_SEQUENCE_LEN) at
/// construction, so the true sum always fits and no wrap can occur.
///
/// ```
/// use tallybench::{sum_store_direct, Addr, Sequence, WordStore};
///
/// let mut store = WordStore::new();
/// let sequence = Sequence::build(&mut store, Addr::new(3), 100)?;
/// assert_eq!(sum_store_direct(&store, &sequence), 450);
/// # Ok::<(), tallybench::BuildError>(())
/// ```
pub fn sum_store_direct(store: &WordStore, sequence: &Sequence) -> u64 {
    let elements = element_base(sequence.base());
    let len = sequence.len(store);
    let mut total: u64 = 0;
    let mut i: u64 = 0;
    while i < len {
        total = total.wrapping_add(store.read(elements.offset(i)));
        // SAFETY: `i < len`, so `i + 1` cannot exceed `len` and in particular
        // cannot overflow.
        i = unsafe { i.unchecked_add(1) };
    }
    total
}
