//! Example-based tests for the contracted addition.

use super::common::{quiet_add, recorded, SOME_ADDITIONS};
use calculus::{add, add_naturals, ContractError, Policy, ADD};

#[test]
fn test_addition() {
    assert_eq!(quiet_add(2, 3), 5);
}

#[test]
fn test_addition_table() {
    for &((a, b), expected) in SOME_ADDITIONS {
        assert_eq!(quiet_add(a, b), expected, "add({}, {})", a, b);
    }
}

#[test]
fn test_addition_table_is_clean_under_strict() {
    let (sums, mismatches) = recorded(Policy::Strict, |ctx| {
        SOME_ADDITIONS
            .iter()
            .map(|&((a, b), _)| add(ctx, a, b))
            .collect::<Result<Vec<_>, ContractError>>()
    });

    assert_eq!(sums.unwrap(), vec![8, 6, 15]);
    assert!(mismatches.is_empty());
}

#[test]
fn test_zero_is_natural() {
    assert_eq!(quiet_add(0, 0), 0);
    assert_eq!(quiet_add(0, 42), 42);
}

#[test]
fn test_largest_sum_without_overflow() {
    let (sum, mismatches) = recorded(Policy::Strict, |ctx| add(ctx, i64::MAX - 1, 1));
    assert_eq!(sum, Ok(i64::MAX));
    assert!(mismatches.is_empty());
}

#[test]
fn test_raw_addition_matches_contracted() {
    for &((a, b), _) in SOME_ADDITIONS {
        assert_eq!(add_naturals(a, b), quiet_add(a, b));
    }
}

#[test]
fn test_add_is_a_static_contracted_function() {
    assert_eq!(ADD.name(), "add");
    assert_eq!(ADD.params().len(), 2);
    assert!(ADD.params().iter().all(|p| p.name() == "Natural number"));
    assert_eq!(ADD.returns().name(), "Natural number");
}
