// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluate many additions and report what the contract saw.
//!
//! Input is a JSON array of pairs, `[[2, 3], [3, 5], [-1, 4]]`. Each pair
//! goes through the contracted `add` under the caller's context. The caller's
//! observer still hears every mismatch; a recorder in front of it captures
//! them per pair for the report.

use crate::calculus::add;
use crate::contract::{
    CheckSite, Policy, RecordingObserver, ValidationContext, ValidationErrorObserver,
};
use crate::error::ValidationMismatch;
use crate::refined::BaseType;
use serde::Serialize;

/// One evaluated pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub a: i64,
    pub b: i64,
    /// `None` when a strict context aborted the call.
    pub sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub mismatches: Vec<ValidationMismatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub policy: Policy,
    pub evaluations: Vec<Evaluation>,
    pub total_mismatches: usize,
}

impl BatchReport {
    /// Number of evaluations that did not produce a sum.
    pub fn aborted(&self) -> usize {
        self.evaluations.iter().filter(|e| e.sum.is_none()).count()
    }
}

/// Forwards to the recorder first, then to the caller's observer.
struct Tee<'a> {
    recorder: &'a RecordingObserver,
    downstream: &'a dyn ValidationErrorObserver,
}

impl ValidationErrorObserver for Tee<'_> {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType) {
        self.recorder.on_error(site, expected, found);
        self.downstream.on_error(site, expected, found);
    }
}

/// Parse `[[a, b], ...]`.
pub fn parse_pairs(json: &str) -> Result<Vec<(i64, i64)>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn evaluate(ctx: &ValidationContext<'_>, pairs: &[(i64, i64)]) -> BatchReport {
    let recorder = RecordingObserver::new();
    let tee = Tee {
        recorder: &recorder,
        downstream: ctx.observer(),
    };
    let inner = ValidationContext::new(&tee).with_policy(ctx.policy());

    let evaluations: Vec<Evaluation> = pairs
        .iter()
        .map(|&(a, b)| {
            let outcome = add(&inner, a, b);
            let mismatches = recorder.take();
            match outcome {
                Ok(sum) => Evaluation {
                    a,
                    b,
                    sum: Some(sum),
                    error: None,
                    mismatches,
                },
                Err(err) => Evaluation {
                    a,
                    b,
                    sum: None,
                    error: Some(err.to_string()),
                    mismatches,
                },
            }
        })
        .collect();

    let total_mismatches = evaluations.iter().map(|e| e.mismatches.len()).sum();

    BatchReport {
        policy: ctx.policy(),
        evaluations,
        total_mismatches,
    }
}
