//! Unit tests for individual components.

mod common;

#[path = "unit/addition.rs"]
mod addition;

#[path = "unit/refinement.rs"]
mod refinement;

#[path = "unit/reporting.rs"]
mod reporting;

#[path = "unit/batch.rs"]
mod batch;
