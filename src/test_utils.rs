// SPDX-License-Identifier: MPL-2.0
//! Test utilities.
//!
//! Re-exports the `approx` assertion macro used for float comparisons, and
//! hosts the mutex serializing tests that touch process-wide environment
//! variables.

pub use approx::assert_abs_diff_eq;

use std::sync::Mutex;

/// Tests that set environment variables take this lock so parallel tests
/// cannot observe each other's overrides.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());
