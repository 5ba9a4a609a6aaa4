//! Go-to-definition — jump from an occurrence to where its name is defined.

use smol_str::SmolStr;

use crate::base::SourceSpan;
use crate::hir::IdentifierIndex;

/// A definition site to jump to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotoTarget {
    pub name: SmolStr,
    pub span: SourceSpan,
}

/// Definition sites of the references containing a position, innermost first.
///
/// Binders and names defined outside real source (built-ins, other
/// packages without location info) produce no target.
pub fn goto_definition(index: &IdentifierIndex, line: u32, col: u32) -> Vec<GotoTarget> {
    let mut entries = index.entries_at(line, col);
    entries.sort_by_key(|(span, _)| span.extent());

    let mut targets: Vec<GotoTarget> = Vec::new();
    for (_, record) in entries {
        if record.binding.is_binding() {
            continue;
        }
        let Some(span) = record.definition.as_span() else {
            continue;
        };
        if targets.iter().any(|t| &t.span == span) {
            continue;
        }
        targets.push(GotoTarget {
            name: record.name.clone(),
            span: span.clone(),
        });
    }
    targets
}
