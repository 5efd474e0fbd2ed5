// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contracted addition under arbitrary operands.
//!
//! Any pair of `i64`s must go through `add` without panicking, including
//! pairs that overflow. The advisory result is always the wrapped sum, and
//! the observer hears exactly one report per negative operand plus one more
//! if the sum is negative.

#![no_main]

use arbitrary::Arbitrary;
use calculus::contract::Position;
use calculus::{add, Policy, RecordingObserver, ValidationContext};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AddInput {
    a: i64,
    b: i64,
    strict: bool,
}

fuzz_target!(|input: AddInput| {
    let AddInput { a, b, strict } = input;
    let policy = if strict { Policy::Strict } else { Policy::Advisory };

    let recorder = RecordingObserver::new();
    let ctx = ValidationContext::new(&recorder).with_policy(policy);
    let result = add(&ctx, a, b);
    let mismatches = recorder.take();

    let sum = a.wrapping_add(b);
    let expected_reports = [a, b, sum].iter().filter(|x| **x < 0).count();

    match policy {
        Policy::Advisory => {
            assert_eq!(result, Ok(sum));
            assert_eq!(mismatches.len(), expected_reports);

            // Arguments are reported in order, the return value last
            let mut positions = mismatches.iter().map(|m| m.position);
            if a < 0 {
                assert_eq!(positions.next(), Some(Position::Argument(0)));
            }
            if b < 0 {
                assert_eq!(positions.next(), Some(Position::Argument(1)));
            }
            if sum < 0 {
                assert_eq!(positions.next(), Some(Position::Return));
            }
        }
        Policy::Strict => {
            assert_eq!(mismatches.len(), usize::from(expected_reports > 0));
            assert_eq!(result.is_ok(), expected_reports == 0);
            if let Ok(value) = result {
                assert_eq!(value, sum);
            }
        }
    }
});
