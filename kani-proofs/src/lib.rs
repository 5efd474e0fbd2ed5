// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for natural-number addition.
//!
//! This standalone crate extracts the raw addition and the natural-number
//! predicate behind the contracted `add`, and proves the algebraic laws for
//! every `i64` Kani can pick, not just the ones a property test samples.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `add_naturals` never panics, even on overflow
//! 2. **Commutativity**: `add(a, b) == add(b, a)`
//! 3. **Associativity**: `add(a, add(b, c)) == add(add(a, b), c)`
//! 4. **Identity**: `add(a, 0) == a == add(0, a)`
//! 5. **Closure**: naturals whose sum fits in `i64` add to a natural

// ============================================================================
// ARITHMETIC (mirrors src/calculus.rs and src/refined/predicates.rs)
// ============================================================================

/// Addition behind the contract. Wraps on overflow; the contract's return
/// check is what catches a wrapped sum.
pub fn add_naturals(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// The natural-number predicate specialised to `i64`.
pub fn is_natural(x: i64) -> bool {
    x >= 0
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify add_naturals never panics on any pair.
    #[kani::proof]
    fn verify_add_no_panic() {
        let a: i64 = kani::any();
        let b: i64 = kani::any();

        // This must not panic, overflow included
        let _ = add_naturals(a, b);
    }

    #[kani::proof]
    fn verify_commutativity() {
        let a: i64 = kani::any();
        let b: i64 = kani::any();

        kani::assert(
            add_naturals(a, b) == add_naturals(b, a),
            "add must be commutative",
        );
    }

    /// Wrapping addition is associative over all of i64, so no bounds are
    /// needed here.
    #[kani::proof]
    fn verify_associativity() {
        let a: i64 = kani::any();
        let b: i64 = kani::any();
        let c: i64 = kani::any();

        kani::assert(
            add_naturals(a, add_naturals(b, c)) == add_naturals(add_naturals(a, b), c),
            "add must be associative",
        );
    }

    #[kani::proof]
    fn verify_identity() {
        let a: i64 = kani::any();

        kani::assert(add_naturals(a, 0) == a, "0 must be a right identity");
        kani::assert(add_naturals(0, a) == a, "0 must be a left identity");
    }

    /// Verify the sum of two naturals is natural when it does not overflow.
    #[kani::proof]
    fn verify_natural_closure() {
        let a: i64 = kani::any_where(|&x| is_natural(x));
        let b: i64 = kani::any_where(|&x| is_natural(x));
        kani::assume(a <= i64::MAX - b);

        kani::assert(
            is_natural(add_naturals(a, b)),
            "sum of naturals must be natural",
        );
    }

    /// Verify an overflowing sum of naturals is never natural, so the return
    /// check always reports it.
    #[kani::proof]
    fn verify_overflow_is_detected() {
        let a: i64 = kani::any_where(|&x| is_natural(x));
        let b: i64 = kani::any_where(|&x| is_natural(x));
        kani::assume(a > i64::MAX - b);

        kani::assert(
            !is_natural(add_naturals(a, b)),
            "overflowing sum must fail the predicate",
        );
    }
}
