//! Custom cargo commands for the calculus crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask check     - Quick check (no Kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// `INVARIANT:` comments expected under src/.
const MIN_INVARIANT_MARKERS: usize = 5;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + self-test + Kani)
  test      Run all Rust tests
  kani      Run Kani proofs only
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// One named step of a suite.
type Step = (&'static str, fn() -> Result<()>);

/// Full verification suite
fn verify() -> Result<()> {
    let steps: [Step; 5] = [
        ("Checking invariant markers", check_invariant_markers),
        ("Running Rust tests", || run_cargo(&["test", "--quiet"])),
        ("Running clippy", clippy),
        ("Running the self-test", || {
            run_cargo(&["run", "--quiet", "--", "--policy", "strict", "check"])
        }),
        ("Running Kani proofs", kani),
    ];

    println!("==========================================");
    println!("Calculus Verification Suite");
    println!("==========================================\n");

    run_steps(&steps)?;

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

fn run_steps(steps: &[Step]) -> Result<()> {
    for (i, (label, step)) in steps.iter().enumerate() {
        println!("[{}/{}] {}...", i + 1, steps.len(), label);
        step().with_context(|| format!("step failed: {}", label))?;
        println!("✓ done\n");
    }
    Ok(())
}

fn clippy() -> Result<()> {
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;

    // The proofs crate is outside the workspace
    let proofs_dir = project_root()?.join("kani-proofs");
    run_in(&proofs_dir, "cargo", &["test", "--quiet"])
}

/// Run Kani proofs, skipping when cargo-kani is not installed
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !proofs_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let installed = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !installed {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_in(&proofs_dir, "cargo", &["kani"])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    let steps: [Step; 3] = [
        ("cargo check", || run_cargo(&["check"])),
        ("cargo test", || run_cargo(&["test", "--quiet"])),
        ("cargo clippy", clippy),
    ];

    run_steps(&steps)?;
    println!("✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;
    run_in(&root, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let src_dir = project_root()?.join("src");
    let count = count_markers(&src_dir)?;

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}

fn count_markers(dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
        let path = entry?.path();
        if path.is_dir() {
            count += count_markers(&path)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            count += source.lines().filter(|l| l.contains("INVARIANT:")).count();
        }
    }

    Ok(count)
}
