//! Mismatch reporting through observers and policies.

use super::common::recorded;
use calculus::contract::{CheckSite, Position, ValidationErrorObserver};
use calculus::{add, BaseType, ContractError, Policy, PrintObserver, ValidationContext};
use std::cell::Cell;

#[test]
fn test_one_report_per_offending_argument() {
    let (sum, mismatches) = recorded(Policy::Advisory, |ctx| add(ctx, -2, -3));

    // -5 also fails at the return
    assert_eq!(sum, Ok(-5));
    let positions: Vec<Position> = mismatches.iter().map(|m| m.position).collect();
    assert_eq!(
        positions,
        vec![Position::Argument(0), Position::Argument(1), Position::Return]
    );
}

#[test]
fn test_negative_argument_with_natural_result() {
    let (sum, mismatches) = recorded(Policy::Advisory, |ctx| add(ctx, -2, 5));

    assert_eq!(sum, Ok(3));
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].function, "add");
    assert_eq!(mismatches[0].position, Position::Argument(0));
    assert_eq!(mismatches[0].expected, "Natural number");
    assert_eq!(mismatches[0].found, BaseType::Int);
    assert_eq!(mismatches[0].to_string(), "Expected Natural number, got Int");
}

#[test]
fn test_valid_call_reports_nothing() {
    let (_, mismatches) = recorded(Policy::Advisory, |ctx| add(ctx, 2, 3));
    assert!(mismatches.is_empty());
}

#[test]
fn test_strict_aborts_on_first_mismatch() {
    let (result, mismatches) = recorded(Policy::Strict, |ctx| add(ctx, -2, -3));

    match result {
        Err(ContractError::Violation(mismatch)) => {
            assert_eq!(mismatch.position, Position::Argument(0));
        }
        other => panic!("expected a violation, got {:?}", other),
    }
    assert_eq!(mismatches.len(), 1);
}

#[test]
fn test_strict_reports_overflow() {
    let (result, mismatches) = recorded(Policy::Strict, |ctx| add(ctx, i64::MAX, 1));

    assert!(matches!(
        result,
        Err(ContractError::Violation(ref m)) if m.position == Position::Return
    ));
    assert_eq!(mismatches.len(), 1);
}

#[test]
fn test_print_observer_message() {
    let printer = PrintObserver::new(Vec::new());
    let ctx = ValidationContext::new(&printer);

    assert_eq!(add(&ctx, -2, 5), Ok(3));
    assert_eq!(add(&ctx, 2, 3), Ok(5));

    let printed = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(printed, "Expected Natural number, got Int\n");
}

/// A custom observer only needs the one method.
struct Counter(Cell<usize>);

impl ValidationErrorObserver for Counter {
    fn on_error(&self, _site: &CheckSite<'_>, _expected: &str, _found: BaseType) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_custom_observer() {
    let counter = Counter(Cell::new(0));
    let ctx = ValidationContext::new(&counter);

    add(&ctx, -1, 1).unwrap();
    add(&ctx, 1, -1).unwrap();
    add(&ctx, 1, 1).unwrap();

    assert_eq!(counter.0.get(), 2);
}

#[test]
fn test_contexts_are_independent() {
    let (_, first) = recorded(Policy::Advisory, |ctx| add(ctx, -1, 1));
    let (_, second) = recorded(Policy::Advisory, |ctx| add(ctx, 1, 1));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
