// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Natural numbers and contract-checked addition.
//!
//! `NATURAL_NUMBER` is the one refined type: non-negative, integral, example
//! `42`. `ADD` is plain integer addition contracted as
//! `(Natural number, Natural number) -> Natural number`.
//!
//! # Overflow
//!
//! The raw addition wraps. Two naturals whose sum exceeds `i64::MAX` wrap to
//! a negative number, which the return check then reports. Overflow shows up
//! as a contract mismatch instead of a panic in debug builds and silent
//! garbage in release builds.

use crate::contract::{with_contract, ContractedFunction, ValidationContext};
use crate::error::ContractError;
use crate::refined::{is_natural, RefinedType};

/// Witness for `NATURAL_NUMBER`.
pub const NATURAL_EXAMPLE: i64 = 42;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the natural-number witness is natural.
/// If it fails, the crate won't build.
const _: () = {
    // INVARIANT: the example satisfies is_non_negative
    assert!(NATURAL_EXAMPLE >= 0);

    // INVARIANT: i64 values are always integral, nothing to assert for is_integral
};

/// Non-negative integers.
pub static NATURAL_NUMBER: RefinedType<i64> =
    RefinedType::from_parts(is_natural::<i64>, NATURAL_EXAMPLE, "Natural number");

/// Every refined type this crate defines, for self-tests.
pub static BUILTIN_TYPES: [&RefinedType<i64>; 1] = [&NATURAL_NUMBER];

static ADD_PARAMS: [&RefinedType<i64>; 2] = [&NATURAL_NUMBER, &NATURAL_NUMBER];

/// The unchecked addition behind `ADD`.
pub fn add_naturals(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// `add(Natural number, Natural number) -> Natural number`
pub static ADD: ContractedFunction<'static, i64, fn(i64, i64) -> i64, (i64, i64)> =
    with_contract(&ADD_PARAMS, &NATURAL_NUMBER).wrap("add", add_naturals as fn(i64, i64) -> i64);

/// Add two natural numbers under `ctx`.
///
/// Negative inputs and overflowing sums are reported to the context's
/// observer. Under the advisory policy the sum is returned anyway; under the
/// strict policy the first mismatch is returned as an error.
///
/// ```
/// use calculus::contract::{SilentObserver, ValidationContext};
///
/// let ctx = ValidationContext::new(&SilentObserver);
/// assert_eq!(calculus::add(&ctx, 2, 3).unwrap(), 5);
/// ```
pub fn add(ctx: &ValidationContext<'_>, a: i64, b: i64) -> Result<i64, ContractError> {
    ADD.call(ctx, &[a, b])
}
