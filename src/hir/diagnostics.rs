//! Diagnostics — what lenient extraction skipped, and why.
//!
//! In strict mode these conditions are errors and no diagnostics are
//! produced. In lenient mode each skip is recorded here so callers can
//! surface "partially indexed" states without failing the file.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::LocationRef;
use crate::syntax::NodeShape;

use super::error::Phase;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic, on the LSP scale.
///
/// Extraction itself only reports warnings; the remaining levels exist so
/// [`Severity::to_lsp`] covers the whole protocol range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the skipped construct or occurrence sits.
    pub location: LocationRef,
    /// The tree being traversed when it was skipped.
    pub phase: Phase,
    pub severity: Severity,
    /// Diagnostic code (e.g., "X0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(location: LocationRef, phase: Phase, message: impl Into<Arc<str>>) -> Self {
        Self {
            location,
            phase,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Codes for skipped constructs.
pub mod codes {
    /// Unsupported node shape; subtree skipped.
    pub const UNSUPPORTED_CONSTRUCT: &str = "X0001";
    /// Identifier occurrence without a precise span; record skipped.
    pub const IMPRECISE_LOCATION: &str = "X0002";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a traversal.
#[derive(Clone, Debug)]
pub struct DiagnosticCollector {
    phase: Phase,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector for one pass.
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            diagnostics: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a skipped subtree.
    pub fn unsupported_construct(&mut self, shape: NodeShape, location: LocationRef) {
        self.add(
            Diagnostic::warning(
                location,
                self.phase,
                format!("skipped unsupported construct {shape}"),
            )
            .with_code(codes::UNSUPPORTED_CONSTRUCT),
        );
    }

    /// Record an occurrence skipped for lack of a real span.
    pub fn imprecise_location(&mut self, name: &SmolStr, description: &SmolStr) {
        self.add(
            Diagnostic::warning(
                LocationRef::Opaque(description.clone()),
                self.phase,
                format!("skipped '{name}': no precise location"),
            )
            .with_code(codes::IMPRECISE_LOCATION),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics carrying a specific code.
    pub fn with_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.code.as_deref() == Some(code))
            .collect()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SourceSpan;

    #[test]
    fn test_unsupported_construct_diagnostic() {
        let mut collector = DiagnosticCollector::new(Phase::Renamed);
        let loc = LocationRef::Precise(SourceSpan::on_line("A.hs", 4, 1, 9));
        collector.unsupported_construct(NodeShape::ExprSplice, loc.clone());

        let diag = &collector.diagnostics()[0];
        assert_eq!(diag.location, loc);
        assert_eq!(diag.phase, Phase::Renamed);
        assert_eq!(diag.code.as_deref(), Some(codes::UNSUPPORTED_CONSTRUCT));
        assert!(diag.message.contains("ExprSplice"));
    }

    #[test]
    fn test_collector_counts_and_take() {
        let mut collector = DiagnosticCollector::new(Phase::Typechecked);
        collector.imprecise_location(&SmolStr::new("x"), &SmolStr::new("generated"));
        collector.unsupported_construct(NodeShape::Proc, LocationRef::opaque("?"));

        assert_eq!(collector.warning_count(), 2);
        assert_eq!(collector.with_code(codes::IMPRECISE_LOCATION).len(), 1);

        let taken = collector.take();
        assert_eq!(taken.len(), 2);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_severity_to_lsp() {
        assert_eq!(Severity::Error.to_lsp(), 1);
        assert_eq!(Severity::Warning.to_lsp(), 2);
        assert_eq!(Severity::Info.to_lsp(), 3);
        assert_eq!(Severity::Hint.to_lsp(), 4);
    }
}
