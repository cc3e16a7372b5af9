//! Custom cargo commands for the growbuf crate.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests (all features)
//!   cargo xtask check         - Quick check (no model checking)
//!   cargo xtask bench         - Run benchmarks
//!   cargo xtask fuzz [TARGET] - Fuzz one target (default: all) for 60s each

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["array_ops", "text_buffer", "text_grid"];
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + kani)
  test      Run all Rust tests with every feature enabled
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run cargo-fuzz targets (needs nightly and cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("growbuf Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract assertions...");
    check_contract_markers()?;
    println!("✓ Contract assertions present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet", "--all-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Verifying growth constants match the Kani model...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--all-features"])
}

/// Quick check (no model checking)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("unknown fuzz target `{}` (expected one of {:?})", t, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for t in targets {
        println!("Fuzzing {} for {}s...", t, FUZZ_SECONDS);
        run_cargo(&["+nightly", "fuzz", "run", t, "--", &max_time])?;
    }
    Ok(())
}

/// Run the standalone Kani crate, skipping when cargo-kani is not installed.
fn kani() -> Result<()> {
    let installed = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !installed {
        println!("  (cargo-kani not installed, skipping)\n");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(project_root()?.join("kani-proofs"))
        .status()
        .context("Failed to run cargo kani")?;
    if !status.success() {
        bail!("Kani proofs failed");
    }
    println!("✓ Kani proofs passed\n");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
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

/// Every contract in `verify/contracts.rs` must keep its panic message.
fn check_contract_markers() -> Result<()> {
    let path = project_root()?.join("src/verify/contracts.rs");
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let count = content.matches("\"Contract violation:").count();
    if count < 4 {
        bail!(
            "Expected at least 4 contract assertions, found {}. Someone may have removed a check!",
            count
        );
    }
    Ok(())
}

/// The Kani model copies the growth constants; make sure they did not drift.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let crate_src = fs::read_to_string(root.join("src/array/growth.rs"))
        .context("Failed to read src/array/growth.rs")?;
    let model_src = fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in ["GROWTH_FACTOR", "INITIAL_CAPACITY"] {
        let ours = extract_const(&crate_src, name)
            .with_context(|| format!("{} missing from growth.rs", name))?;
        let model = extract_const(&model_src, name)
            .with_context(|| format!("{} missing from kani-proofs", name))?;
        if ours != model {
            bail!("{} differs: crate has {}, Kani model has {}", name, ours, model);
        }
        println!("  {} = {}", name, ours);
    }
    Ok(())
}

/// Value of `pub const NAME: usize = VALUE;` in `content`.
fn extract_const(content: &str, name: &str) -> Option<usize> {
    let prefix = format!("pub const {}: usize = ", name);
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(&prefix))
        .and_then(|rest| rest.trim_end_matches(';').trim().parse().ok())
}
