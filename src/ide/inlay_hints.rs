//! Inlay hints — inferred types after binders.

use crate::base::SourceSpan;
use crate::hir::IdentifierIndex;

/// Kind of inlay hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlayHintKind {
    /// Type annotation hint (e.g., `:: Int`)
    Type,
}

/// An inlay hint to display in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlayHint {
    pub line: u32,
    /// Column right after the binder's last character.
    pub col: u32,
    /// The text to display
    pub label: String,
    pub kind: InlayHintKind,
    /// Whether to add padding before the hint
    pub padding_left: bool,
    /// Whether to add padding after the hint
    pub padding_right: bool,
}

/// Get inlay hints for an index.
///
/// Returns a type hint after every typed term-level binder, optionally
/// limited to binders lying entirely inside `range`.
pub fn inlay_hints(index: &IdentifierIndex, range: Option<&SourceSpan>) -> Vec<InlayHint> {
    let mut hints = Vec::new();

    for (span, record) in index {
        // Skip if outside the requested range
        if let Some(range) = range {
            if span.file != range.file
                || !range.contains(span.start_line, span.start_col)
                || !range.contains(span.end_line, span.end_col)
            {
                continue;
            }
        }

        if !record.binding.is_binding() || !record.namespace.is_term_level() {
            continue;
        }
        let Some(ty) = &record.resolved_type else {
            continue;
        };

        hints.push(InlayHint {
            line: span.end_line,
            col: span.end_col.saturating_add(1),
            label: format!(":: {ty}"),
            kind: InlayHintKind::Type,
            padding_left: true,
            padding_right: false,
        });
    }

    hints
}
