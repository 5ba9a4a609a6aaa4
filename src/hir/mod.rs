//! Identifier extraction — records, the span-keyed index, and the passes
//! that build it.
//!
//! ## Architecture
//!
//! ```text
//! Module<ResolvedName> ──visit──▶ IdentifierIndex (R) ─┐
//!                                                      ├─ combine(T, R)
//! Module<TypedName<T>> ──visit──▶ IdentifierIndex (T) ─┘
//! ```
//!
//! Each identifier occurrence becomes an [`IdentifierRecord`] through the
//! construction adapter; [`extract`] runs both passes and merges them.

mod adapter;
mod config;
mod diagnostics;
mod error;
mod extract;
mod index;
mod input;
mod symbols;
mod visit;

pub use adapter::{
    NoTypes, TypeRenderer, location_ref, record_for, record_from_name, record_from_typed,
};
pub use config::{DIAGNOSTICS_ENV, ExtractConfig, MODE_ENV, Mode, SupportMatrix};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use error::{ExtractError, Phase, TraversalError};
pub use extract::{Extraction, extract, extract_batch, extract_or_absent, extract_with_diagnostics};
pub use index::{IdentifierIndex, combine};
pub use input::FileTrees;
pub use symbols::{BindingKind, IdentifierRecord, Namespace};
pub use visit::index_tree;
