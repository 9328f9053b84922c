//! `cvs-annotate`: Annotates the blood volume and pressure variables of a
//! CellML model with OPB and UBERON terms and writes the RDF graph.
//!
//! **Outputs:**
//! - `<out>`: Turtle 1.1 (default) or N-Triples, overwritten
//!
//! **Usage:**
//! ```
//! cvs-annotate [--model <path>] [--out <path>] [--format turtle|ntriples] [--verbose]
//! ```
//!
//! Exits non-zero if the model file does not exist.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cvs_annotator::{AnnotateError, DiagnosticKind, Format};

/// Output serialization.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Turtle 1.1 with namespace prefixes.
    Turtle,
    /// N-Triples, one triple per line.
    Ntriples,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Turtle => Format::Turtle,
            OutputFormat::Ntriples => Format::NTriples,
        }
    }
}

/// Annotate a cardiovascular CellML model.
#[derive(Parser)]
#[command(
    name = "cvs-annotate",
    about = "Annotate CellML blood volume/pressure variables with OPB and UBERON terms"
)]
struct Args {
    /// Path to the CellML model.
    #[arg(long, default_value = "models/cvs-model.cellml")]
    model: PathBuf,

    /// Output file for the annotation graph.
    #[arg(long, default_value = "annotations.ttl")]
    out: PathBuf,

    /// Output serialization.
    #[arg(long, value_enum, default_value_t = OutputFormat::Turtle)]
    format: OutputFormat,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cvs_clients::init_logging(args.verbose);

    let annotation = match cvs_annotator::annotate_file(&args.model) {
        Err(e @ AnnotateError::MissingModel { .. }) => {
            eprintln!("{e}");
            process::exit(1);
        }
        other => other.with_context(|| format!("Failed to annotate {}", args.model.display()))?,
    };

    // Print summary
    println!(
        "Annotated {}: {} volume, {} pressure, {} flow (not annotated) ids",
        args.model.display(),
        annotation.ids.volume_ids.len(),
        annotation.ids.pressure_ids.len(),
        annotation.ids.flow_ids.len()
    );
    println!(
        "  {} local entities, {} triples",
        annotation.local_entities,
        annotation.graph.len()
    );
    if !annotation.diagnostics.is_empty() {
        println!(
            "  {} warnings: {} unknown ids, {} unknown cavities",
            annotation.diagnostics.len(),
            annotation.diagnostics.count(DiagnosticKind::UnknownId),
            annotation.diagnostics.count(DiagnosticKind::UnknownCavity)
        );
    }

    let format = Format::from(args.format);
    let serialized = format.serialize(&annotation.graph);
    fs::write(&args.out, &serialized)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    tracing::info!(path = %args.out.display(), ?format, "wrote annotations");
    println!("  Written: {}", args.out.display());

    Ok(())
}
