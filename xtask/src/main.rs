//! Custom cargo commands for the sufarray crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["engine_differential", "construction", "json_symbols"];
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (debug + release tests, clippy, contract markers)
  test      Run all Rust tests
  check     Quick check (cargo check + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {}s (needs cargo-fuzz and nightly)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sufarray Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks wired into construction\n");

    // Debug builds run the construction contracts on every index.
    println!("[2/5] Running tests (debug)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Debug tests passed\n");

    println!("[3/5] Running tests (release)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/5] Running tests without the parallel feature...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    println!("[5/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No fuzz crashes");
    Ok(())
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

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Construction must keep calling the contract checks; losing one silently
/// turns debug builds into release builds for that property.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/prefix_doubling/mod.rs"))
        .context("Failed to read src/prefix_doubling/mod.rs")?;

    let required = [
        "check_names_injective",
        "check_inverse",
        "check_suffix_array_sorted",
        "check_lcp_correct",
        "check_rounds_bound",
    ];
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !source.contains(name))
        .collect();

    if !missing.is_empty() {
        bail!("Construction no longer calls contract checks: {}", missing.join(", "));
    }

    Ok(())
}
