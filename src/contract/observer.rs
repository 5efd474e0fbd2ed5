// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Observers: where contract mismatches go.
//!
//! The contract code never decides how a mismatch is surfaced. It hands the
//! site, the expected type and the found type to whatever observer the
//! [`ValidationContext`](super::ValidationContext) carries. Print it, log it,
//! collect it, or ignore it.

use super::context::CheckSite;
use crate::error::ValidationMismatch;
use crate::refined::BaseType;
use std::cell::RefCell;
use std::io::{self, Write};
use tracing::warn;

/// Handles one type-mismatch event.
pub trait ValidationErrorObserver {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType);
}

impl<O: ValidationErrorObserver + ?Sized> ValidationErrorObserver for &O {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType) {
        (**self).on_error(site, expected, found);
    }
}

impl<O: ValidationErrorObserver + ?Sized> ValidationErrorObserver for Box<O> {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType) {
        (**self).on_error(site, expected, found);
    }
}

/// Writes `Expected {expected}, got {found}` as one line to a sink.
///
/// The sink is stdout unless built with [`PrintObserver::new`] or
/// [`PrintObserver::stderr`].
#[derive(Debug)]
pub struct PrintObserver<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl PrintObserver {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl PrintObserver<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for PrintObserver {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Give back the sink, with everything written so far.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ValidationErrorObserver for PrintObserver<W> {
    fn on_error(&self, _site: &CheckSite<'_>, expected: &str, found: BaseType) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "Expected {}, got {}", expected, found) {
            warn!(error = %err, "could not print contract mismatch");
        }
    }
}

/// Emits a `tracing` warning with the site as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ValidationErrorObserver for LogObserver {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType) {
        warn!(
            function = site.function,
            position = %site.position,
            expected,
            found = %found,
            "Expected {}, got {}",
            expected,
            found
        );
    }
}

/// Ignores every mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ValidationErrorObserver for SilentObserver {
    fn on_error(&self, _site: &CheckSite<'_>, _expected: &str, _found: BaseType) {}
}

/// Keeps every mismatch it hears about, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: RefCell<Vec<ValidationMismatch>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn mismatches(&self) -> Vec<ValidationMismatch> {
        self.seen.borrow().clone()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<ValidationMismatch> {
        self.seen.take()
    }

    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl ValidationErrorObserver for RecordingObserver {
    fn on_error(&self, site: &CheckSite<'_>, expected: &str, found: BaseType) {
        self.seen
            .borrow_mut()
            .push(ValidationMismatch::new(site, expected, found));
    }
}
