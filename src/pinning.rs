// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pinning the benchmark thread to a CPU.
//!
//! Summation runs are short and single-threaded; a scheduler migrating the
//! thread between CPUs mid-measurement adds noise. The bench harnesses and
//! the CLI runner therefore pin the calling thread before measuring, on
//! platforms that support `libc::sched_setaffinity()`.

#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use crate::macros::log_debug;
use crate::macros::log_warn;
#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use nix::{
    sched::{sched_setaffinity, CpuSet},
    unistd::Pid,
};

/// Policy for pinning the calling thread to a CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinningPolicy {
    /// Don't pin the thread to any CPU.
    No,
    /// Pin the thread to a CPU, if this is supported on this platform.
    IfSupported,
    /// Pin the thread to a CPU. Panics if this isn't supported on this
    /// platform.
    Always,
}

/// Pins the calling thread to CPU #0 according to the given policy.
///
/// With [`PinningPolicy::IfSupported`], failures to pin are logged and
/// otherwise ignored.
pub fn pin_current_thread(policy: PinningPolicy) {
    match policy {
        PinningPolicy::No => {}
        PinningPolicy::IfSupported => {
            #[cfg(all(
                not(miri),
                any(
                    target_os = "android",
                    target_os = "dragonfly",
                    target_os = "freebsd",
                    target_os = "linux"
                )
            ))]
            pin_to_cpu0();
            #[cfg(any(
                miri,
                not(any(
                    target_os = "android",
                    target_os = "dragonfly",
                    target_os = "freebsd",
                    target_os = "linux"
                ))
            ))]
            log_warn!("Pinning the thread to a CPU is not implemented on this platform.");
        }
        PinningPolicy::Always => {
            #[cfg(all(
                not(miri),
                any(
                    target_os = "android",
                    target_os = "dragonfly",
                    target_os = "freebsd",
                    target_os = "linux"
                )
            ))]
            pin_to_cpu0();
            #[cfg(any(
                miri,
                not(any(
                    target_os = "android",
                    target_os = "dragonfly",
                    target_os = "freebsd",
                    target_os = "linux"
                ))
            ))]
            panic!("Pinning the thread to a CPU is not implemented on this platform.");
        }
    }
}

#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
fn pin_to_cpu0() {
    let mut cpu_set = CpuSet::new();
    if let Err(_e) = cpu_set.set(0) {
        log_warn!("Failed to set CPU affinity for the benchmark thread: {_e}");
    } else if let Err(_e) = sched_setaffinity(Pid::from_raw(0), &cpu_set) {
        log_warn!("Failed to set CPU affinity for the benchmark thread: {_e}");
    } else {
        log_debug!("Pinned the benchmark thread to CPU #0");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_pinning_is_a_no_op() {
        pin_current_thread(PinningPolicy::No);
    }

    #[test]
    fn pinning_if_supported_never_panics() {
        pin_current_thread(PinningPolicy::IfSupported);
    }
}
