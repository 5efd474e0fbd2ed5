// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The refinement layer: base types narrowed by a predicate.
//!
//! A refined type is a base type (`Int`, `Float`, `String`, `Bool`) plus a
//! pure predicate, a display name, and an example value that witnesses the
//! predicate. The example is checked once, when the type is defined. After
//! that the type is an immutable value that contracts borrow.
//!
//! Predicates compose with plain boolean logic. `is_natural` is just
//! `is_non_negative(x) && is_integral(x)`; the layer has no combinator
//! machinery of its own.

mod predicates;
mod types;

pub use predicates::{is_integral, is_natural, is_non_negative, Number};
pub use types::{Base, BaseType, Predicate, RefinedType};
