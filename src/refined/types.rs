// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Refined types and the base types they narrow.
//!
//! # Example
//!
//! ```
//! use calculus::refined::{is_natural, RefinedType};
//!
//! let natural = RefinedType::define(is_natural::<i64>, 42, "Natural number").unwrap();
//! assert!(natural.check(&7));
//! assert!(!natural.check(&-7));
//!
//! // The example has to satisfy its own predicate
//! assert!(RefinedType::define(is_natural::<i64>, -1, "Natural number").is_err());
//! ```

use crate::error::DefinitionError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Semantic tag of the value a refined type narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseType {
    Int,
    Float,
    String,
    Bool,
}

impl BaseType {
    pub const fn name(self) -> &'static str {
        match self {
            BaseType::Int => "Int",
            BaseType::Float => "Float",
            BaseType::String => "String",
            BaseType::Bool => "Bool",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust type that carries values of one [`BaseType`].
pub trait Base: Clone + fmt::Debug {
    /// The tag every value of this type reports.
    const BASE: BaseType;

    /// Runtime type of this value, as shown in mismatch reports.
    fn type_of(&self) -> BaseType {
        Self::BASE
    }
}

impl Base for i64 {
    const BASE: BaseType = BaseType::Int;
}

impl Base for f64 {
    const BASE: BaseType = BaseType::Float;
}

impl Base for String {
    const BASE: BaseType = BaseType::String;
}

impl Base for bool {
    const BASE: BaseType = BaseType::Bool;
}

/// A total, side-effect-free test on a value.
pub type Predicate<T> = fn(&T) -> bool;

/// A base type narrowed by a predicate, with a display name and a witness.
///
/// # Invariants (enforced at construction)
/// - `predicate(example)` holds
/// - `name` is non-empty
///
/// Refined types are never mutated. Contracts hold them by reference, so
/// one definition is shared by every function that mentions it.
#[derive(Clone)]
pub struct RefinedType<T> {
    predicate: Predicate<T>,
    example: T,
    name: Cow<'static, str>,
}

impl<T: Base> RefinedType<T> {
    /// Define a refined type, checking the example against the predicate.
    ///
    /// Returns `Err` if the example is rejected by its own predicate or the
    /// name is empty. Either one is a mistake in the definition, so callers
    /// should fail fast rather than carry on with a half-built type.
    pub fn define(
        predicate: Predicate<T>,
        example: T,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, DefinitionError> {
        let refined = Self {
            predicate,
            example,
            name: name.into(),
        };
        refined.verify_example()?;
        Ok(refined)
    }

    /// Re-run the definition-time checks.
    ///
    /// Types built through [`RefinedType::define`] always pass. Built-in
    /// statics are asserted at compile time instead; this lets the self-test
    /// confirm them at runtime too.
    pub fn verify_example(&self) -> Result<(), DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName { base: T::BASE });
        }

        if !(self.predicate)(&self.example) {
            return Err(DefinitionError::ExampleRejected {
                name: self.name.to_string(),
                base: T::BASE,
                example: format!("{:?}", self.example),
            });
        }

        Ok(())
    }

    /// Does `value` belong to this refined type?
    #[inline]
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn base(&self) -> BaseType {
        T::BASE
    }
}

impl<T> RefinedType<T> {
    /// Build a refined type without running the predicate.
    ///
    /// Only for `static` definitions, whose example is covered by a
    /// compile-time assertion next to the definition.
    pub(crate) const fn from_parts(
        predicate: Predicate<T>,
        example: T,
        name: &'static str,
    ) -> Self {
        Self {
            predicate,
            example,
            name: Cow::Borrowed(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn example(&self) -> &T {
        &self.example
    }

    pub fn predicate(&self) -> Predicate<T> {
        self.predicate
    }
}

impl<T: fmt::Debug> fmt::Debug for RefinedType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefinedType")
            .field("name", &self.name)
            .field("example", &self.example)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for RefinedType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
