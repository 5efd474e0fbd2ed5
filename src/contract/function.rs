// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrapping plain functions in contracts.
//!
//! `with_contract(params, returns)` builds a [`Contract`]; `.wrap(name, f)`
//! attaches it to `f`. Both steps are `const fn`, so a contracted function
//! can be declared as a `static` right next to the function it guards.

use super::context::{CheckSite, Position, ValidationContext};
use crate::error::{ArityError, ContractError, ValidationMismatch};
use crate::refined::{Base, RefinedType};
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// A callable that takes a fixed number of `T` and returns a `T`.
///
/// `Args` is a marker tuple (`(T,)`, `(T, T)`, `(T, T, T)`) that keeps the
/// implementations for different arities apart. It is inferred from the
/// closure or function passed to [`Contract::wrap`].
pub trait Function<T, Args> {
    /// Number of arguments the callable takes.
    const ARITY: usize;

    /// Call with `args`, or `None` if `args.len() != ARITY`.
    fn apply(&self, args: &[T]) -> Option<T>;
}

impl<T: Clone, F: Fn(T) -> T> Function<T, (T,)> for F {
    const ARITY: usize = 1;

    fn apply(&self, args: &[T]) -> Option<T> {
        match args {
            [a] => Some(self(a.clone())),
            _ => None,
        }
    }
}

impl<T: Clone, F: Fn(T, T) -> T> Function<T, (T, T)> for F {
    const ARITY: usize = 2;

    fn apply(&self, args: &[T]) -> Option<T> {
        match args {
            [a, b] => Some(self(a.clone(), b.clone())),
            _ => None,
        }
    }
}

impl<T: Clone, F: Fn(T, T, T) -> T> Function<T, (T, T, T)> for F {
    const ARITY: usize = 3;

    fn apply(&self, args: &[T]) -> Option<T> {
        match args {
            [a, b, c] => Some(self(a.clone(), b.clone(), c.clone())),
            _ => None,
        }
    }
}

/// Declared parameter and return types. Borrows the refined types.
pub struct Contract<'a, T> {
    params: &'a [&'a RefinedType<T>],
    returns: &'a RefinedType<T>,
}

// Manual impls: the contract only holds references, so no `T: Clone` bound.
impl<T> Clone for Contract<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Contract<'_, T> {}

/// Declare the types a function accepts and returns.
pub const fn with_contract<'a, T>(
    params: &'a [&'a RefinedType<T>],
    returns: &'a RefinedType<T>,
) -> Contract<'a, T> {
    Contract { params, returns }
}

impl<'a, T> Contract<'a, T> {
    /// Attach this contract to `function`.
    ///
    /// Arity is not compared here; a mismatch between the declared
    /// parameters and the callable is reported by the first call.
    pub const fn wrap<F, Args>(
        self,
        name: &'a str,
        function: F,
    ) -> ContractedFunction<'a, T, F, Args>
    where
        F: Function<T, Args>,
    {
        ContractedFunction {
            name,
            contract: self,
            function,
            _args: PhantomData,
        }
    }

    pub fn params(&self) -> &'a [&'a RefinedType<T>] {
        self.params
    }

    pub fn returns(&self) -> &'a RefinedType<T> {
        self.returns
    }
}

/// A function plus the contract it is checked against on every call.
pub struct ContractedFunction<'a, T, F, Args> {
    name: &'a str,
    contract: Contract<'a, T>,
    function: F,
    _args: PhantomData<fn(Args)>,
}

impl<'a, T, F, Args> ContractedFunction<'a, T, F, Args>
where
    T: Base,
    F: Function<T, Args>,
{
    /// Check the arguments, call the function, check the result.
    ///
    /// Under [`Policy::Advisory`](super::Policy::Advisory) the result is
    /// returned whatever the checks found; the observer has been told about
    /// each failure. Under [`Policy::Strict`](super::Policy::Strict) the
    /// first failure ends the call.
    pub fn call(&self, ctx: &ValidationContext<'_>, args: &[T]) -> Result<T, ContractError> {
        let declared = self.contract.params.len();

        // INVARIANT: arity is settled before any predicate runs
        if F::ARITY != declared {
            return Err(self.declaration_error().into());
        }
        if args.len() != declared {
            return Err(ArityError::Arguments {
                function: self.name.to_string(),
                expected: declared,
                found: args.len(),
            }
            .into());
        }

        for (index, (expected, arg)) in self.contract.params.iter().zip(args).enumerate() {
            self.check(ctx, Position::Argument(index), expected, arg)?;
        }

        let result = self
            .function
            .apply(args)
            .ok_or_else(|| self.declaration_error())?;

        // INVARIANT: advisory calls check the return even after argument failures
        self.check(ctx, Position::Return, self.contract.returns, &result)?;

        Ok(result)
    }

    fn check(
        &self,
        ctx: &ValidationContext<'_>,
        position: Position,
        expected: &RefinedType<T>,
        value: &T,
    ) -> Result<(), ValidationMismatch> {
        if expected.check(value) {
            trace!(function = self.name, position = %position, expected = expected.name(), "ok");
            return Ok(());
        }

        let site = CheckSite {
            function: self.name,
            position,
        };
        ctx.report(site, expected.name(), value.type_of())
    }

    fn declaration_error(&self) -> ArityError {
        ArityError::Declaration {
            function: self.name.to_string(),
            declared: self.contract.params.len(),
            accepted: F::ARITY,
        }
    }

    /// Number of arguments the wrapped function takes.
    pub fn arity(&self) -> usize {
        F::ARITY
    }
}

impl<'a, T, F, Args> ContractedFunction<'a, T, F, Args> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn params(&self) -> &'a [&'a RefinedType<T>] {
        self.contract.params
    }

    pub fn returns(&self) -> &'a RefinedType<T> {
        self.contract.returns
    }

    /// `add(Natural number, Natural number) -> Natural number`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.contract.params.iter().map(|p| p.name()).collect();
        format!(
            "{}({}) -> {}",
            self.name,
            params.join(", "),
            self.contract.returns.name()
        )
    }
}

impl<T, F, Args> fmt::Debug for ContractedFunction<'_, T, F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractedFunction")
            .field("signature", &self.signature())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Policy, RecordingObserver};
    use crate::refined::{is_natural, BaseType};

    fn natural() -> RefinedType<i64> {
        RefinedType::define(is_natural::<i64>, 42, "Natural number").unwrap()
    }

    fn sub(a: i64, b: i64) -> i64 {
        a - b
    }

    #[test]
    fn test_valid_call_reports_nothing() {
        let natural = natural();
        let params = [&natural, &natural];
        let f = with_contract(&params, &natural).wrap("sub", sub);

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        assert_eq!(f.call(&ctx, &[5, 3]).unwrap(), 2);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_return_violation_is_reported_and_result_kept() {
        let natural = natural();
        let params = [&natural, &natural];
        let f = with_contract(&params, &natural).wrap("sub", sub);

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        assert_eq!(f.call(&ctx, &[3, 5]).unwrap(), -2);
        let seen = recorder.mismatches();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].position, Position::Return);
        assert_eq!(seen[0].expected, "Natural number");
        assert_eq!(seen[0].found, BaseType::Int);
    }

    #[test]
    fn test_strict_stops_before_calling() {
        use std::cell::Cell;

        let natural = natural();
        let params = [&natural];
        let calls = Cell::new(0);
        let f = with_contract(&params, &natural).wrap("inc", |x: i64| {
            calls.set(calls.get() + 1);
            x + 1
        });

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder).with_policy(Policy::Strict);

        let err = f.call(&ctx, &[-1]).unwrap_err();
        assert!(matches!(
            err,
            ContractError::Violation(ref m) if m.position == Position::Argument(0)
        ));
        assert_eq!(calls.get(), 0);
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_argument_count_mismatch() {
        let natural = natural();
        let params = [&natural, &natural];
        let f = with_contract(&params, &natural).wrap("sub", sub);

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        let err = f.call(&ctx, &[-1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ContractError::Arity(ArityError::Arguments {
                function: "sub".to_string(),
                expected: 2,
                found: 3,
            })
        );
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_declaration_mismatch() {
        let natural = natural();
        let params = [&natural];
        let f = with_contract(&params, &natural).wrap("sub", sub);

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        let err = f.call(&ctx, &[1]).unwrap_err();
        assert_eq!(
            err,
            ContractError::Arity(ArityError::Declaration {
                function: "sub".to_string(),
                declared: 1,
                accepted: 2,
            })
        );
    }

    #[test]
    fn test_three_argument_function() {
        let natural = natural();
        let params = [&natural, &natural, &natural];
        let f = with_contract(&params, &natural).wrap("sum3", |a: i64, b: i64, c: i64| a + b + c);

        let recorder = RecordingObserver::new();
        let ctx = ValidationContext::new(&recorder);

        assert_eq!(f.arity(), 3);
        assert_eq!(f.call(&ctx, &[2, 3, 5]).unwrap(), 10);
    }

    #[test]
    fn test_signature() {
        let natural = natural();
        let params = [&natural, &natural];
        let f = with_contract(&params, &natural).wrap("sub", sub);
        assert_eq!(f.signature(), "sub(Natural number, Natural number) -> Natural number");
    }
}
