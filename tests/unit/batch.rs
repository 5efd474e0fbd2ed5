//! Batch evaluation from a JSON payload.

use calculus::batch::{evaluate, parse_pairs};
use calculus::{Policy, RecordingObserver, ValidationContext};

#[test]
fn test_batch_from_json() {
    let pairs = parse_pairs("[[2, 3], [3, 5], [2, 4], [6, 9]]").unwrap();
    let recorder = RecordingObserver::new();
    let ctx = ValidationContext::new(&recorder);

    let report = evaluate(&ctx, &pairs);
    let sums: Vec<Option<i64>> = report.evaluations.iter().map(|e| e.sum).collect();

    assert_eq!(sums, vec![Some(5), Some(8), Some(6), Some(15)]);
    assert_eq!(report.total_mismatches, 0);
    assert!(recorder.is_empty());
}

#[test]
fn test_batch_strict_report() {
    let recorder = RecordingObserver::new();
    let ctx = ValidationContext::new(&recorder).with_policy(Policy::Strict);

    let report = evaluate(&ctx, &[(-1, -1), (1, 1)]);

    assert_eq!(report.aborted(), 1);
    assert_eq!(report.evaluations[0].mismatches.len(), 1);
    assert_eq!(
        report.evaluations[0].error.as_deref(),
        Some("add: argument 0 violates contract: Expected Natural number, got Int")
    );
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_empty_batch() {
    let recorder = RecordingObserver::new();
    let ctx = ValidationContext::new(&recorder);

    let report = evaluate(&ctx, &parse_pairs("[]").unwrap());
    assert!(report.evaluations.is_empty());
    assert_eq!(report.total_mismatches, 0);
}
