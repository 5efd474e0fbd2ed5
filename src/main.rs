// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, bail, Context, Result};
use calculus::{add, batch, laws, ValidationContext, ADD, BUILTIN_TYPES};
use clap::Parser;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, fail_mark, pass_mark, paint, warn_mark, Color};
use cli::{resolve_policy, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", fail_mark(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays usable for results. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let policy = resolve_policy(cli.policy).map_err(|e| anyhow!(e))?;
    let observer = cli.observer.build(cli.command.writes_data_to_stdout());
    let ctx = ValidationContext::new(observer.as_ref()).with_policy(policy);

    tracing::debug!(policy = %policy, observer = ?cli.observer, "validation context ready");

    match cli.command {
        Commands::Add { a, b } => run_add(&ctx, a, b),
        Commands::Batch { pretty } => run_batch(&ctx, pretty),
        Commands::Inspect => {
            inspect();
            Ok(())
        }
        Commands::Check => run_check(&ctx),
    }
}

fn run_add(ctx: &ValidationContext<'_>, a: i64, b: i64) -> Result<()> {
    let sum = add(ctx, a, b)?;
    println!("{}", sum);
    Ok(())
}

fn run_batch(ctx: &ValidationContext<'_>, pretty: bool) -> Result<()> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read stdin")?;
    let pairs = batch::parse_pairs(&raw).context("invalid payload, expected [[a, b], ...]")?;

    let report = batch::evaluate(ctx, &pairs);

    let serialized = if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize report")?;

    writeln!(std::io::stdout(), "{}", serialized).context("write stdout")?;

    let aborted = report.aborted();
    if aborted > 0 {
        bail!("{} of {} additions aborted by the contract", aborted, pairs.len());
    }
    Ok(())
}

/// Contract diagram for `add`.
fn inspect() {
    display::frame_top("CONTRACT");
    display::frame_row(&format!(" {}", paint(Color::Cyan, true, &ADD.signature())));
    display::frame_row("");

    let slots = ADD
        .params()
        .iter()
        .enumerate()
        .map(|(i, ty)| (format!("arg {}", i), *ty))
        .chain(std::iter::once(("return".to_string(), ADD.returns())));

    display::frame_row(&format!(
        " {}{}{}{}",
        display::pad_right("slot", 10),
        display::pad_right("refined type", 20),
        display::pad_right("base", 8),
        "example"
    ));
    for (slot, ty) in slots {
        let example_ok = if ty.verify_example().is_ok() {
            pass_mark()
        } else {
            fail_mark()
        };
        display::frame_row(&format!(
            " {}{}{}{} {}",
            display::pad_right(&slot, 10),
            display::pad_right(ty.name(), 20),
            display::pad_right(ty.base().name(), 8),
            ty.example(),
            example_ok
        ));
    }
    display::frame_bottom();
}

fn run_check(ctx: &ValidationContext<'_>) -> Result<()> {
    let mut failures = 0;

    for ty in BUILTIN_TYPES.iter() {
        match ty.verify_example() {
            Ok(()) => eprintln!(
                "{} refined type '{}' accepts its example {}",
                pass_mark(),
                ty.name(),
                ty.example()
            ),
            Err(e) => {
                eprintln!("{} {}", fail_mark(), e);
                failures += 1;
            }
        }
    }

    match laws::check_samples(ctx) {
        Ok(checked) => eprintln!("{} {} law checks passed", pass_mark(), checked),
        Err(e @ laws::LawError::Contract(_)) => {
            eprintln!("{} {}", warn_mark(), e);
            failures += 1;
        }
        Err(e) => {
            eprintln!("{} {}", fail_mark(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("self-test failed ({} problem(s))", failures);
    }

    eprintln!();
    eprintln!("{} Self-test complete", pass_mark());
    Ok(())
}
