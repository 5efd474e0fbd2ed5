// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract-checked natural-number arithmetic.
//!
//! A refined type narrows a base type with a predicate. A contract attaches
//! refined types to the parameters and return value of a function. Calling a
//! contracted function checks every argument and the result, and hands any
//! mismatch to a pluggable observer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌───────────────┐
//! │  refined/    │────▶│  contract/     │────▶│  calculus.rs  │
//! │ (RefinedType,│     │ (with_contract,│     │ (NATURAL_     │
//! │  is_natural) │     │  observers)    │     │  NUMBER, ADD) │
//! └──────────────┘     └────────────────┘     └───────────────┘
//!                                                │        │
//!                                                ▼        ▼
//!                                      ┌──────────┐  ┌──────────┐
//!                                      │ laws.rs  │  │ batch.rs │
//!                                      └──────────┘  └──────────┘
//! ```
//!
//! # Policies
//!
//! Whether a mismatch stops the call is a property of the
//! [`ValidationContext`], not of the contract:
//!
//! | Policy     | Observer called | Call result                      |
//! |------------|-----------------|----------------------------------|
//! | `Advisory` | every mismatch  | `Ok(value)` regardless           |
//! | `Strict`   | first mismatch  | `Err(ContractError::Violation)`  |
//!
//! # Usage
//!
//! ```
//! use calculus::{add, PrintObserver, ValidationContext};
//!
//! let printer = PrintObserver::stdout();
//! let ctx = ValidationContext::new(&printer);
//! assert_eq!(add(&ctx, 2, 3).unwrap(), 5);
//!
//! // Prints "Expected Natural number, got Int" and still adds
//! assert_eq!(add(&ctx, -2, 3).unwrap(), 1);
//! ```

// Module declarations
pub mod batch;
mod calculus;
pub mod contract;
mod error;
pub mod laws;
pub mod refined;

// Re-exports for public API
pub use calculus::{add, add_naturals, ADD, BUILTIN_TYPES, NATURAL_EXAMPLE, NATURAL_NUMBER};
pub use contract::{
    LogObserver, Policy, PrintObserver, RecordingObserver, SilentObserver, ValidationContext,
    ValidationErrorObserver,
};
pub use error::{ArityError, ContractError, DefinitionError, ValidationMismatch};
pub use refined::{BaseType, RefinedType};
