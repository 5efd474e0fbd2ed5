//! Algebraic laws of contracted addition, checked at runtime.
//!
//! Each function here evaluates both sides of one law through the contracted
//! `add` and compares them. They back the `calculus check` self-test and the
//! property tests; the Kani harnesses prove the same laws for the raw
//! addition.
//!
//! | Law              | Statement                                   |
//! |------------------|---------------------------------------------|
//! | Commutativity    | `add(a, b) == add(b, a)`                    |
//! | Associativity    | `add(a, add(b, c)) == add(add(a, b), c)`    |
//! | Right identity   | `add(a, 0) == a`                            |
//! | Left identity    | `add(0, a) == a`                            |
//!
//! Under the strict policy a contract violation on either side is returned
//! as [`LawError::Contract`]; it says nothing about the law itself.

use crate::calculus::add;
use crate::contract::ValidationContext;
use crate::error::ContractError;
use serde::Serialize;
use std::fmt;

/// Pairs checked by the self-test. `(2, 3)` is the pinned example.
pub const SAMPLE_PAIRS: &[(i64, i64)] = &[
    (2, 3),
    (3, 5),
    (2, 4),
    (6, 9),
    (0, 0),
    (0, 42),
    (1, i64::MAX - 1),
];

/// Triples checked by the self-test. `(2, 3, 5)` is the pinned example.
pub const SAMPLE_TRIPLES: &[(i64, i64, i64)] =
    &[(2, 3, 5), (0, 0, 0), (1, 2, 3), (100, 200, 300)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    Commutativity,
    Associativity,
    RightIdentity,
    LeftIdentity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::Commutativity => f.write_str("commutativity"),
            Law::Associativity => f.write_str("associativity"),
            Law::RightIdentity => f.write_str("right identity"),
            Law::LeftIdentity => f.write_str("left identity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LawError {
    /// Both sides were computed but differ.
    Broken {
        law: Law,
        inputs: Vec<i64>,
        left: i64,
        right: i64,
    },
    /// A side could not be computed.
    Contract(ContractError),
}

impl fmt::Display for LawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawError::Broken {
                law,
                inputs,
                left,
                right,
            } => write!(
                f,
                "{} does not hold for {:?}: {} != {}",
                law, inputs, left, right
            ),
            LawError::Contract(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LawError::Contract(err) => Some(err),
            LawError::Broken { .. } => None,
        }
    }
}

impl From<ContractError> for LawError {
    fn from(err: ContractError) -> Self {
        LawError::Contract(err)
    }
}

fn compare(law: Law, inputs: &[i64], left: i64, right: i64) -> Result<(), LawError> {
    if left == right {
        Ok(())
    } else {
        Err(LawError::Broken {
            law,
            inputs: inputs.to_vec(),
            left,
            right,
        })
    }
}

pub fn check_commutativity(ctx: &ValidationContext<'_>, a: i64, b: i64) -> Result<(), LawError> {
    let left = add(ctx, a, b)?;
    let right = add(ctx, b, a)?;
    compare(Law::Commutativity, &[a, b], left, right)
}

pub fn check_associativity(
    ctx: &ValidationContext<'_>,
    a: i64,
    b: i64,
    c: i64,
) -> Result<(), LawError> {
    let left = add(ctx, a, add(ctx, b, c)?)?;
    let right = add(ctx, add(ctx, a, b)?, c)?;
    compare(Law::Associativity, &[a, b, c], left, right)
}

/// Checks both `add(a, 0) == a` and `add(0, a) == a`.
pub fn check_identity(ctx: &ValidationContext<'_>, a: i64) -> Result<(), LawError> {
    compare(Law::RightIdentity, &[a], add(ctx, a, 0)?, a)?;
    compare(Law::LeftIdentity, &[a], add(ctx, 0, a)?, a)
}

/// Run every law over the built-in samples. Returns how many checks passed.
pub fn check_samples(ctx: &ValidationContext<'_>) -> Result<usize, LawError> {
    let mut checked = 0;

    for &(a, b) in SAMPLE_PAIRS {
        check_commutativity(ctx, a, b)?;
        check_identity(ctx, a)?;
        check_identity(ctx, b)?;
        checked += 3;
    }

    for &(a, b, c) in SAMPLE_TRIPLES {
        check_associativity(ctx, a, b, c)?;
        checked += 1;
    }

    Ok(checked)
}
