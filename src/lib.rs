// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod address;
mod macros;
pub mod pinning;
mod store;
mod strategy;
mod workspace;

pub use address::{element_base, Addr};
pub use store::{BuildError, Sequence, WordStore, ELEMENT_MODULUS, MAX_ELEMENT, MAX_SEQUENCE_LEN};
pub use strategy::{
    sum_store_checked, sum_store_direct, sum_workspace_checked, sum_workspace_raw,
    sum_workspace_unchecked_counter,
};
pub use workspace::Workspace;
