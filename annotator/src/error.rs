//! Errors that abort an annotation run.

use std::path::PathBuf;

/// A fatal annotation failure.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    /// The model file does not exist or is not a regular file.
    #[error("CellML model file doesn't exist: {}", path.display())]
    MissingModel {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The model file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The model document is not well-formed XML.
    #[error("failed to parse model document: {0}")]
    Parse(#[from] roxmltree::Error),
}
