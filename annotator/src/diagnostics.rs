//! Non-fatal diagnostics collected during an annotation run.
//!
//! Every recovery the pipeline makes (dropping an unrecognized ID, falling
//! back to a generic anatomy term) is both logged through `tracing` and
//! recorded here, so callers can report or assert on them.

use std::fmt;

/// What kind of recovery a diagnostic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A metadata ID matched none of the known suffixes and was dropped.
    UnknownId,
    /// A cavity abbreviation was not in the table; the generic term was used.
    UnknownCavity,
}

impl DiagnosticKind {
    /// Short identifier used in summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownId => "unknown-id",
            Self::UnknownCavity => "unknown-cavity",
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The recovery this records.
    pub kind: DiagnosticKind,
    /// The offending input value.
    pub subject: String,
}

impl Diagnostic {
    /// An ID with no recognized suffix.
    pub fn unknown_id(value: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnknownId,
            subject: value.into(),
        }
    }

    /// A cavity abbreviation absent from the table.
    pub fn unknown_cavity(abbreviation: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnknownCavity,
            subject: abbreviation.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownId => write!(f, "Unknown ID: {}", self.subject),
            DiagnosticKind::UnknownCavity => {
                write!(f, "Unknown cavity abbreviation: {}", self.subject)
            }
        }
    }
}

/// Diagnostics accumulated over one run, in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and emits it as a `warn` event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(kind = diagnostic.kind.as_str(), "{}", diagnostic);
        self.entries.push(diagnostic);
    }

    /// Number of recorded diagnostics of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Iterates over all diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Total number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Diagnostic::unknown_id("lv.volume").to_string(),
            "Unknown ID: lv.volume"
        );
        assert_eq!(
            Diagnostic::unknown_cavity("xx").to_string(),
            "Unknown cavity abbreviation: xx"
        );
    }

    #[test]
    fn counts_by_kind() {
        let mut d = Diagnostics::new();
        d.push(Diagnostic::unknown_id("a"));
        d.push(Diagnostic::unknown_id("b"));
        d.push(Diagnostic::unknown_cavity("c"));
        assert_eq!(d.count(DiagnosticKind::UnknownId), 2);
        assert_eq!(d.count(DiagnosticKind::UnknownCavity), 1);
        assert_eq!(d.len(), 3);
    }
}
