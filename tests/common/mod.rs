//! Shared test utilities and fixtures.

#![allow(dead_code)]

use calculus::{
    add, Policy, RecordingObserver, SilentObserver, ValidationContext, ValidationMismatch,
};

/// Literal additions from the reference table: ((a, b), expected).
pub const SOME_ADDITIONS: &[((i64, i64), i64)] = &[((3, 5), 8), ((2, 4), 6), ((6, 9), 15)];

/// Add without reporting anything. Panics on a contract error, which the
/// advisory policy never produces.
pub fn quiet_add(a: i64, b: i64) -> i64 {
    let ctx = ValidationContext::new(&SilentObserver);
    add(&ctx, a, b).expect("advisory add never fails")
}

/// Run `f` under a fresh recorder and return what it produced plus every
/// mismatch reported along the way.
pub fn recorded<R>(
    policy: Policy,
    f: impl FnOnce(&ValidationContext<'_>) -> R,
) -> (R, Vec<ValidationMismatch>) {
    let recorder = RecordingObserver::new();
    let ctx = ValidationContext::new(&recorder).with_policy(policy);
    let out = f(&ctx);
    (out, recorder.take())
}
