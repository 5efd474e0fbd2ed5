// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract-checked functions.
//!
//! A contract is a list of parameter refined types plus a return refined
//! type. Wrapping a plain function in a contract gives back a value that
//! checks every argument before the call and the result after it:
//!
//! ```text
//! call(ctx, args)
//!   │
//!   ├─ args.len() == params.len()?          no ──▶ Err(ArityError)
//!   ├─ params[i].check(args[i]) for each i  no ──▶ observer.on_error(..)
//!   │                                              └─ Strict? ──▶ Err(Violation)
//!   ├─ result = f(args..)
//!   ├─ returns.check(result)                no ──▶ observer.on_error(..)
//!   │                                              └─ Strict? ──▶ Err(Violation)
//!   └─ Ok(result)
//! ```
//!
//! The observer and the policy travel in an explicit [`ValidationContext`].
//! Nothing is registered globally, so two callers can check the same
//! function with different observers side by side.
//!
//! # Example
//!
//! ```
//! use calculus::contract::{with_contract, RecordingObserver, ValidationContext};
//! use calculus::refined::{is_natural, RefinedType};
//!
//! let natural = RefinedType::define(is_natural::<i64>, 42, "Natural number").unwrap();
//! let params = [&natural];
//! let double = with_contract(&params, &natural).wrap("double", |x: i64| x * 2);
//!
//! let recorder = RecordingObserver::new();
//! let ctx = ValidationContext::new(&recorder);
//!
//! assert_eq!(double.call(&ctx, &[-4]).unwrap(), -8);
//! assert_eq!(recorder.len(), 2); // argument and return value
//! ```

mod context;
mod function;
mod observer;

pub use context::{CheckSite, Policy, Position, ValidationContext};
pub use function::{with_contract, Contract, ContractedFunction, Function};
pub use observer::{
    LogObserver, PrintObserver, RecordingObserver, SilentObserver, ValidationErrorObserver,
};
