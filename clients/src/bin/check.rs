//! `cvs-check`: Validates an annotation artifact written by `cvs-annotate`.
//!
//! Runs the conformance suite:
//! - RDF 1.1 syntax (Turtle, or N-Triples for `.nt` files)
//! - One blood entity per anatomical location
//! - Complete `isPropertyOf` / `isVersionOf` annotations on every variable
//!
//! **Usage:**
//! ```
//! cvs-check [<artifact>] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use cvs_conformance::{run_all, Severity};

/// Check a CVS annotation artifact.
#[derive(Parser)]
#[command(
    name = "cvs-check",
    about = "Validate an annotation artifact's RDF syntax and annotation invariants"
)]
struct Args {
    /// Path to the artifact (default: annotations.ttl).
    #[arg(default_value = "annotations.ttl")]
    artifact: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cvs_clients::init_logging(args.verbose);

    let report = run_all(&args.artifact)?;

    println!("Conformance report for {}", args.artifact.display());
    println!();
    for result in &report.results {
        println!(
            "[{}] {} — {}",
            result.severity.tag(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        report.failure_count()
    );

    if !report.all_passed() {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            report.failure_count()
        );
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
