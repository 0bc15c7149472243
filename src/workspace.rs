// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The transient tier: a call-scoped copy of a sequence.

use crate::address::element_base;
use crate::macros::log_debug;
use crate::store::{Sequence, WordStore};

/// Number of header words preceding the elements in a workspace buffer.
const HEADER_WORDS: usize = 1;

/// Offset of element `index` from the start of the workspace buffer, in
/// words.
///
/// Both the bounds-checked accessor and the raw computed-address accessor go
/// through this function, so the safe and the fast path always agree on the
/// buffer layout.
const fn element_offset(index: usize) -> usize {
    HEADER_WORDS + index
}

/// An ephemeral, exclusively-owned copy of a sequence.
///
/// The buffer holds the length header followed by the elements at word-sized
/// strides, mirroring the persistent layout. A workspace is created at the
/// start of a summation call that needs one, owned by that call alone, and
/// dropped when the call returns; it is never persisted nor shared.
///
/// ```
/// use tallybench::{Addr, Sequence, WordStore, Workspace};
///
/// let mut store = WordStore::new();
/// let sequence = Sequence::build(&mut store, Addr::new(3), 23)?;
/// let workspace = Workspace::copy_from(&store, &sequence);
/// assert_eq!(workspace.len(), 23);
/// assert_eq!(workspace.get(12), 2);
/// # Ok::<(), tallybench::BuildError>(())
/// ```
pub struct Workspace {
    words: Vec<u64>,
}

impl Workspace {
    /// Copies the whole sequence (length header plus elements) out of the
    /// store in one bulk pass.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is too long to fit an in-memory buffer.
    pub fn copy_from(store: &WordStore, sequence: &Sequence) -> Self {
        let len = sequence.len(store);
        let num_words = usize::try_from(len)
            .ok()
            .and_then(|len| len.checked_add(HEADER_WORDS))
            .expect("sequence is too long to copy into an in-memory workspace");
        let mut words = Vec::with_capacity(num_words);
        words.push(len);
        let elements = element_base(sequence.base());
        for i in 0..len {
            words.push(store.read(elements.offset(i)));
        }
        log_debug!("Copied {num_words} words into a workspace");
        Self { words }
    }

    /// Number of elements held by this workspace.
    pub fn len(&self) -> usize {
        self.words.len() - HEADER_WORDS
    }

    /// Returns [`true`] if the workspace holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads element `index` through the bounds-checked accessor.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> u64 {
        assert!(
            index < self.len(),
            "element index {index} out of bounds of a workspace of length {}",
            self.len()
        );
        self.words[element_offset(index)]
    }

    /// Reads element `index` from its computed address, with no bounds
    /// verification.
    ///
    /// The element's address is computed directly as the buffer's base
    /// pointer, plus the header size, plus `index` word-sized strides, and
    /// the value is read from there. Nothing in this function checks `index`
    /// against the workspace length; soundness rests entirely on the caller's
    /// bound.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> u64 {
        // Documents the relied-upon invariant in debug builds; release builds
        // (where the benchmarks run) compile this out.
        debug_assert!(
            index < self.len(),
            "element index {index} out of bounds of a workspace of length {}",
            self.len()
        );
        let base_ptr: *const u64 = self.words.as_ptr();
        // SAFETY:
        // - The offset in bytes `element_offset(index) * size_of::<u64>()` fits in an
        //   `isize`, because `element_offset(index)` is smaller than the length of the
        //   (well-formed) buffer. This is ensured by the safety pre-condition of this
        //   function (`index < self.len()`), as the buffer holds exactly `self.len() +
        //   HEADER_WORDS` words.
        // - The `base_ptr` is derived from an allocated object (the buffer), and the
        //   entire range between `base_ptr` and the resulting `element_ptr` is in
        //   bounds of that allocated object, for the same reason.
        let element_ptr: *const u64 = unsafe { base_ptr.add(element_offset(index)) };
        // SAFETY:
        // - The `element_ptr` is properly aligned, as it is constructed by calling
        //   `add()` on the aligned `base_ptr`.
        // - The `element_ptr` points to a valid, initialized `u64`: the buffer is
        //   fully initialized on construction and `element_offset(index)` is within
        //   it.
        // - The buffer isn't mutated while the shared borrow of this workspace is
        //   live, so the read cannot race with a write.
        unsafe { *element_ptr }
    }
}
