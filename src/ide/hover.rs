//! Hover — type and origin of the identifier under the cursor.

use unicode_ident::{is_xid_continue, is_xid_start};

use crate::base::{LocationRef, SourceSpan};
use crate::hir::{IdentifierIndex, IdentifierRecord};

/// Result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverResult {
    /// Markdown contents.
    pub contents: String,
    /// The occurrence being hovered.
    pub span: SourceSpan,
}

/// Get hover information at a position.
///
/// Uses the innermost record containing the position.
pub fn hover(index: &IdentifierIndex, line: u32, col: u32) -> Option<HoverResult> {
    let (span, record) = index.innermost_at(line, col)?;

    let mut contents = format!("```haskell\n{}\n```", signature(record));

    if let Some(origin) = origin(record) {
        contents.push_str("\n\n---\n\n");
        contents.push_str(&origin);
    }

    Some(HoverResult {
        contents,
        span: span.clone(),
    })
}

/// `name :: type`, or just the name when no type is known.
fn signature(record: &IdentifierRecord) -> String {
    let name = display_name(&record.name);
    match &record.resolved_type {
        Some(ty) => format!("{name} :: {ty}"),
        None => name,
    }
}

fn origin(record: &IdentifierRecord) -> Option<String> {
    match (&record.owning_module, &record.owning_package) {
        (Some(module), Some(package)) => Some(format!("*Defined in* `{module}` *({package})*")),
        (Some(module), None) => Some(format!("*Defined in* `{module}`")),
        _ => match &record.definition {
            LocationRef::Precise(span) => {
                Some(format!("*Defined at* {}:{}", span.file, span.start()))
            }
            LocationRef::Opaque(_) => None,
        },
    }
}

/// Operators are shown in prefix form, e.g. `(<$>)`.
fn display_name(name: &str) -> String {
    if is_operator(name) {
        format!("({name})")
    } else {
        name.to_string()
    }
}

pub(crate) fn is_operator(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || is_xid_start(first) => {
            !chars.all(|c| c == '\'' || is_xid_continue(c))
        }
        Some(_) => true,
        None => false,
    }
}
