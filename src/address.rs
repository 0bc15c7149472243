// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Word addresses, and the derivation of a sequence's element region from its
//! base address.

/// Domain tag for the element-base derivation, so that this hash use can
/// never collide with any other hash of the same input bytes.
const ELEMENTS_DOMAIN: &str = "tallybench-elements-v1";

/// A word address in a [`WordStore`](crate::WordStore).
///
/// The store is word-granular: one address designates one 64-bit word, and
/// consecutive elements of a sequence occupy consecutive addresses. Offset
/// arithmetic wraps around the full 64-bit address space.
///
/// ```
/// use tallybench::Addr;
///
/// let base = Addr::new(41);
/// assert_eq!(base.offset(1), Addr::new(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Addr(u64);

impl Addr {
    /// Creates an address designating the given word.
    pub const fn new(word: u64) -> Self {
        Self(word)
    }

    /// Returns the raw word index of this address.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the address `index` words after this one, wrapping around the
    /// address space.
    #[must_use]
    pub const fn offset(self, index: u64) -> Self {
        Self(self.0.wrapping_add(index))
    }
}

/// Derives the address of a sequence's first element from the sequence's base
/// address.
///
/// The derivation is a one-way, domain-separated BLAKE3 hash of the base
/// address, truncated to one word. Element `i` of a sequence based at `base`
/// then lives at `element_base(base).offset(i)`: sequences anchored at
/// different base addresses occupy unrelated element regions, and no
/// systematic choice of base address can make a header and an element region
/// collide.
///
/// ```
/// use tallybench::{element_base, Addr};
///
/// let base = Addr::new(3);
/// // The derivation is deterministic...
/// assert_eq!(element_base(base), element_base(base));
/// // ...and sensitive to the base address.
/// assert_ne!(element_base(base), element_base(Addr::new(4)));
/// ```
pub fn element_base(base: Addr) -> Addr {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ELEMENTS_DOMAIN.as_bytes());
    hasher.update(b":");
    hasher.update(&base.get().to_le_bytes());
    let digest = hasher.finalize();
    let mut word = [0; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    Addr::new(u64::from_le_bytes(word))
}
