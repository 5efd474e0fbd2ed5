// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the calculus command-line interface.
//!
//! Four subcommands: `add` runs one contracted addition, `batch` runs many
//! from a JSON payload on stdin, `inspect` shows the contract, and `check`
//! runs the self-test. `--policy` and `--observer` pick how mismatches are
//! handled; `CALCULUS_POLICY` supplies the policy when the flag is absent.

pub mod display;

use calculus::{LogObserver, Policy, PrintObserver, SilentObserver, ValidationErrorObserver};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "calculus",
    about = "Contract-checked natural-number arithmetic",
    version
)]
pub struct Cli {
    /// What a contract mismatch does [default: $CALCULUS_POLICY, else advisory]
    #[arg(long, global = true, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Where contract mismatches are reported
    #[arg(long, global = true, value_enum, default_value = "print")]
    pub observer: ObserverArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two natural numbers through the contract
    #[command(allow_negative_numbers = true)]
    Add {
        /// First summand
        a: i64,

        /// Second summand
        b: i64,
    },

    /// Read `[[a, b], ...]` from stdin and write a JSON report to stdout
    Batch {
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Show the contract attached to `add`
    Inspect,

    /// Re-validate built-in refined types and spot-check the addition laws
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Report mismatches and keep going
    Advisory,
    /// Abort the call on the first mismatch
    Strict,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Advisory => Policy::Advisory,
            PolicyArg::Strict => Policy::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ObserverArg {
    /// Print "Expected .., got .." to stdout (stderr for `batch`)
    Print,
    /// Emit a tracing warning on stderr
    Log,
    /// Say nothing
    Silent,
}

impl ObserverArg {
    /// `stdout_is_data` moves printed mismatches to stderr, for commands
    /// whose stdout is machine-readable.
    pub fn build(self, stdout_is_data: bool) -> Box<dyn ValidationErrorObserver> {
        match self {
            ObserverArg::Print if stdout_is_data => Box::new(PrintObserver::stderr()),
            ObserverArg::Print => Box::new(PrintObserver::stdout()),
            ObserverArg::Log => Box::new(LogObserver),
            ObserverArg::Silent => Box::new(SilentObserver),
        }
    }
}

impl Commands {
    /// Commands that write a JSON document to stdout.
    pub fn writes_data_to_stdout(&self) -> bool {
        matches!(self, Commands::Batch { .. })
    }
}

/// Flag first, then `CALCULUS_POLICY`, then advisory.
pub fn resolve_policy(flag: Option<PolicyArg>) -> Result<Policy, String> {
    if let Some(arg) = flag {
        return Ok(arg.into());
    }

    match std::env::var("CALCULUS_POLICY") {
        Ok(value) => value.parse(),
        Err(_) => Ok(Policy::default()),
    }
}
