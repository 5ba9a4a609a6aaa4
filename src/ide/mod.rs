//! IDE features — queries over a finished [`IdentifierIndex`](crate::hir::IdentifierIndex).
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//! 3. **Read-only**: An index is never modified by a query
//!
//! ## Usage
//!
//! ```ignore
//! use identdex::hir::{extract, ExtractConfig};
//! use identdex::ide::hover;
//!
//! let index = extract(&renamed, &typechecked, &render, &ExtractConfig::from_env())?;
//! let info = hover(&index, line, col);
//! ```

mod document_links;
mod goto;
mod hover;
mod inlay_hints;
mod semantic_tokens;

pub use document_links::{DocumentLink, doc_link, document_links};
pub use goto::{GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use inlay_hints::{InlayHint, InlayHintKind, inlay_hints};
pub use semantic_tokens::{SemanticToken, TokenType, semantic_tokens};
