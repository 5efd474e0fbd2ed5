// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeric predicates used to build refined types.

use super::types::Base;

/// Numeric base types the predicates work over.
pub trait Number: Base + Copy + PartialOrd {
    const ZERO: Self;

    /// True when the value has no fractional part.
    fn is_whole(&self) -> bool;
}

impl Number for i64 {
    const ZERO: Self = 0;

    fn is_whole(&self) -> bool {
        // x mod 1 is always 0 for integers
        true
    }
}

impl Number for f64 {
    const ZERO: Self = 0.0;

    fn is_whole(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }
}

/// `x >= 0`. NaN is not non-negative.
pub fn is_non_negative<T: Number>(x: &T) -> bool {
    *x >= T::ZERO
}

/// `x mod 1 == 0`. Infinities and NaN are not integral.
pub fn is_integral<T: Number>(x: &T) -> bool {
    x.is_whole()
}

/// Non-negative and integral.
pub fn is_natural<T: Number>(x: &T) -> bool {
    is_non_negative(x) && is_integral(x)
}
