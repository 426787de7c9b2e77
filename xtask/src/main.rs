//! Custom cargo commands for the bivium crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask check     - Quick check (no Kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

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
  verify    Run full verification suite (tests + Kani + message alignment)
  test      Run all Rust tests
  kani      Run Kani model checking proofs only
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Bivium Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani proofs
    println!("[4/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    // Step 5: Verify panic message alignment
    println!("[5/5] Verifying panic message alignment...");
    verify_messages()?;
    println!("✓ Panic messages aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run the Kani model checking proofs
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !proofs_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    // cargo-kani is an external install; skip gracefully when absent
    let version_check = Command::new("cargo")
        .args(["kani", "--version"])
        .current_dir(&proofs_dir)
        .output();
    if !matches!(version_check, Ok(ref out) if out.status.success()) {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
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
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().unwrap());

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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The unwrap diagnostics are part of the public contract, and the
/// `should_panic` tests match on them as substrings. Keep the constants
/// in `src/outcome.rs` and the expectations in the unwrapping tests from
/// drifting apart.
fn verify_messages() -> Result<()> {
    let root = project_root()?;

    let outcome_rs = std::fs::read_to_string(root.join("src/outcome.rs"))
        .context("Failed to read outcome.rs")?;

    let value_msg = extract_const_str(&outcome_rs, "UNWRAP_VALUE_MSG")
        .context("UNWRAP_VALUE_MSG not found in outcome.rs")?;
    let error_msg = extract_const_str(&outcome_rs, "UNWRAP_ERROR_MSG")
        .context("UNWRAP_ERROR_MSG not found in outcome.rs")?;

    if value_msg == error_msg {
        bail!("Unwrap diagnostics must name which side was requested");
    }

    let unwrapping_rs = std::fs::read_to_string(root.join("tests/unit/unwrapping.rs"))
        .context("Failed to read tests/unit/unwrapping.rs")?;

    let expectations = extract_should_panic_expectations(&unwrapping_rs);

    if !expectations.iter().any(|e| e == &value_msg) {
        bail!(
            "No should_panic test expects the value diagnostic {:?}",
            value_msg
        );
    }
    if !expectations.iter().any(|e| e == &error_msg) {
        bail!(
            "No should_panic test expects the error diagnostic {:?}",
            error_msg
        );
    }

    Ok(())
}

fn extract_const_str(content: &str, name: &str) -> Option<String> {
    // Look for `const UNWRAP_VALUE_MSG: &str = "...";`
    for line in content.lines() {
        if line.contains(&format!("const {}", name)) {
            let mut quoted = line.split('"');
            quoted.next()?;
            return quoted.next().map(str::to_string);
        }
    }
    None
}

fn extract_should_panic_expectations(content: &str) -> Vec<String> {
    // Look for `#[should_panic(expected = "...")]`
    let mut expectations = Vec::new();
    for line in content.lines() {
        if line.contains("should_panic") && line.contains("expected") {
            let mut quoted = line.split('"');
            quoted.next();
            if let Some(msg) = quoted.next() {
                expectations.push(msg.to_string());
            }
        }
    }
    expectations
}
