//! # identdex-base
//!
//! Location-indexed identifier facts extracted from the analyzed syntax
//! trees of a Haskell-family front end: every identifier occurrence with a
//! real source span becomes a record saying what it names, where that name
//! is defined, which module and package own it, and (after type checking)
//! its type.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → IDE queries (hover, goto-def, doc links, inlay hints, tokens)
//!   ↓
//! hir     → Records, index, traversal, extraction driver
//!   ↓
//! syntax  → Analyzed-tree model handed over by the front end
//!   ↓
//! base    → Primitives (SourceSpan, LocationRef, LineCol)
//! ```
//!
//! ## Features
//!
//! - `strict`: make [`hir::Mode::Strict`] the default mode
//! - `interchange`: JSON persistence of [`hir::IdentifierIndex`]
//! - `proptest`: property-based test suites

/// Foundation types: spans and definition-site locations
pub mod base;

/// Extraction: records, the span-keyed index, and the passes that build it
pub mod hir;

/// IDE features: hover, goto-definition, document links
pub mod ide;

/// Analyzed syntax trees, generic over the identifier type
pub mod syntax;

// Re-export foundation types
pub use base::{LineCol, LocationRef, SourceSpan};

// Re-export the extraction entry points
pub use hir::{
    ExtractConfig, ExtractError, IdentifierIndex, IdentifierRecord, Mode, extract, extract_batch,
};
