// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The validation context: which observer hears about mismatches, and
//! whether a mismatch stops the call.

use super::observer::ValidationErrorObserver;
use crate::error::ValidationMismatch;
use crate::refined::BaseType;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// What happens after the observer has been told about a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Report and keep going. The call returns its result regardless.
    #[default]
    Advisory,
    /// Report, then abort the call with [`ContractError::Violation`](crate::ContractError::Violation).
    Strict,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Advisory => f.write_str("advisory"),
            Policy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advisory" | "warn" => Ok(Policy::Advisory),
            "strict" | "abort" => Ok(Policy::Strict),
            other => Err(format!(
                "unknown policy '{}' (expected 'advisory' or 'strict')",
                other
            )),
        }
    }
}

/// Which value of a call was being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Zero-based argument index.
    Argument(usize),
    Return,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Argument(index) => write!(f, "argument {}", index),
            Position::Return => f.write_str("return value"),
        }
    }
}

/// Where a mismatch happened. Handed to the observer with every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSite<'a> {
    pub function: &'a str,
    pub position: Position,
}

impl fmt::Display for CheckSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.function, self.position)
    }
}

/// Observer plus policy, passed to every contracted call.
#[derive(Clone, Copy)]
pub struct ValidationContext<'o> {
    observer: &'o dyn ValidationErrorObserver,
    policy: Policy,
}

impl<'o> ValidationContext<'o> {
    /// Advisory context reporting to `observer`.
    pub fn new(observer: &'o dyn ValidationErrorObserver) -> Self {
        Self {
            observer,
            policy: Policy::Advisory,
        }
    }

    pub fn with_policy(self, policy: Policy) -> Self {
        Self { policy, ..self }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn observer(&self) -> &'o dyn ValidationErrorObserver {
        self.observer
    }

    /// Tell the observer about a mismatch, then apply the policy.
    ///
    /// The observer is always called exactly once, whatever the policy.
    pub(crate) fn report(
        &self,
        site: CheckSite<'_>,
        expected: &str,
        found: BaseType,
    ) -> Result<(), ValidationMismatch> {
        debug!(
            function = site.function,
            position = %site.position,
            expected,
            found = %found,
            policy = %self.policy,
            "contract mismatch"
        );

        // INVARIANT: one notification per mismatch, before the policy decides
        self.observer.on_error(&site, expected, found);

        match self.policy {
            Policy::Advisory => Ok(()),
            Policy::Strict => Err(ValidationMismatch::new(&site, expected, found)),
        }
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::RecordingObserver;

    fn site() -> CheckSite<'static> {
        CheckSite {
            function: "add",
            position: Position::Argument(0),
        }
    }

    #[test]
    fn test_advisory_reports_and_continues() {
        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        assert!(ctx.report(site(), "Natural number", BaseType::Int).is_ok());
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_strict_reports_then_fails() {
        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder).with_policy(Policy::Strict);

        let err = ctx
            .report(site(), "Natural number", BaseType::Int)
            .unwrap_err();
        assert_eq!(err.position, Position::Argument(0));
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<Policy>(), Ok(Policy::Strict));
        assert_eq!(" Advisory ".parse::<Policy>(), Ok(Policy::Advisory));
        assert!("lenient".parse::<Policy>().is_err());
    }

    #[test]
    fn test_site_display() {
        assert_eq!(site().to_string(), "add: argument 0");
        assert_eq!(Position::Return.to_string(), "return value");
    }
}
