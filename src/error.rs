// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for definitions and contracted calls.
//!
//! Two very different kinds of failure live here. A [`DefinitionError`] is a
//! programming mistake caught while building a refined type. A
//! [`ValidationMismatch`] is a value that broke a contract at call time; it
//! is reported to the observer and only becomes an error under
//! [`Policy::Strict`](crate::contract::Policy::Strict).

use crate::contract::{CheckSite, Position};
use crate::refined::BaseType;
use serde::Serialize;
use std::fmt;

/// A refined type definition that cannot stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The example value fails the type's own predicate.
    ExampleRejected {
        name: String,
        base: BaseType,
        example: String,
    },
    /// The display name is empty.
    EmptyName { base: BaseType },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::ExampleRejected {
                name,
                base,
                example,
            } => {
                write!(
                    f,
                    "refined type '{}' rejects its own example {} ({})",
                    name, example, base
                )
            }
            DefinitionError::EmptyName { base } => {
                write!(f, "refined type over {} has an empty name", base)
            }
        }
    }
}

impl std::error::Error for DefinitionError {}

/// A contracted call whose shape does not line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArityError {
    /// The call supplied a different number of arguments than the contract declares.
    Arguments {
        function: String,
        expected: usize,
        found: usize,
    },
    /// The contract declares a different number of parameters than the function takes.
    Declaration {
        function: String,
        declared: usize,
        accepted: usize,
    },
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityError::Arguments {
                function,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{}: expected {} arguments, got {}",
                    function, expected, found
                )
            }
            ArityError::Declaration {
                function,
                declared,
                accepted,
            } => {
                write!(
                    f,
                    "{}: contract declares {} parameters but the function takes {}",
                    function, declared, accepted
                )
            }
        }
    }
}

impl std::error::Error for ArityError {}

/// A value that failed its refined type during a contracted call.
///
/// Displays in the observer's format: `Expected {expected}, got {found}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMismatch {
    pub function: String,
    pub position: Position,
    pub expected: String,
    pub found: BaseType,
}

impl ValidationMismatch {
    pub fn new(site: &CheckSite<'_>, expected: &str, found: BaseType) -> Self {
        Self {
            function: site.function.to_string(),
            position: site.position,
            expected: expected.to_string(),
            found,
        }
    }
}

impl fmt::Display for ValidationMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected {}, got {}", self.expected, self.found)
    }
}

impl std::error::Error for ValidationMismatch {}

/// Why a contracted call did not return a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    Arity(ArityError),
    /// Only raised under a strict policy.
    Violation(ValidationMismatch),
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::Arity(err) => write!(f, "{}", err),
            ContractError::Violation(mismatch) => write!(
                f,
                "{}: {} violates contract: {}",
                mismatch.function, mismatch.position, mismatch
            ),
        }
    }
}

impl std::error::Error for ContractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContractError::Arity(err) => Some(err),
            ContractError::Violation(mismatch) => Some(mismatch),
        }
    }
}

impl From<ArityError> for ContractError {
    fn from(err: ArityError) -> Self {
        ContractError::Arity(err)
    }
}

impl From<ValidationMismatch> for ContractError {
    fn from(mismatch: ValidationMismatch) -> Self {
        ContractError::Violation(mismatch)
    }
}
