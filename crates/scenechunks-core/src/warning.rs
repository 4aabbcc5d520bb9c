//! Import diagnostics - know what the heuristics could not place.

use crate::ImportedDocument;

/// Result of an import, including heuristic warnings.
///
/// Parsing itself never fails; degraded outcomes (unrecognized beat
/// markers, fallback scenes) are surfaced here as ordinary data.
#[derive(Debug)]
pub struct ImportResult {
    /// The parsed document.
    pub document: ImportedDocument,
    /// Warnings about lines the heuristics handled in a degraded way.
    pub warnings: Vec<ImportWarning>,
}

impl ImportResult {
    /// Create a result with no warnings.
    pub fn ok(document: ImportedDocument) -> Self {
        Self {
            document,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(document: ImportedDocument, warnings: Vec<ImportWarning>) -> Self {
        Self { document, warnings }
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A warning raised during import.
#[derive(Debug, Clone)]
pub struct ImportWarning {
    /// How severe is this warning?
    pub severity: Severity,
    /// What kind of issue?
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
    /// 1-based source line, where known.
    pub line: Option<usize>,
}

impl ImportWarning {
    /// Create a new warning.
    pub fn new(severity: Severity, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            line: None,
        }
    }

    /// Set the source line.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Severity of an import warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Information only, nothing lost.
    Info,
    /// Content kept, but placed by a fallback rule.
    Minor,
    /// Content may be misplaced or dropped.
    Major,
}

/// Kind of import issue.
#[derive(Debug, Clone)]
pub enum WarningKind {
    /// Beat marker text did not match any known structural beat.
    UnrecognizedBeat(String),
    /// No scene heading found; document wrapped in a fallback scene.
    FallbackScene,
    /// Input contained no usable content at all.
    EmptyDocument,
}
